use charref_test_support::diff_lines;
use charref_test_support::expected::parse_expected_decoded;
use charref_test_support::manifest::{FixtureCase, FixtureStatus, load_manifest};
use charref_test_support::parse_env_bool;
use charref_test_support::runner::{
    per_char_plan, run_decode_chunked, run_decode_whole, single_split_plans,
};
use charref_test_support::skips::{load_skip_overrides, validate_skip_override_ids};
use std::collections::BTreeSet;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
struct RunConfig {
    filter: Option<String>,
    chunked: bool,
}

#[derive(Clone, Debug)]
struct Failure {
    id: String,
    message: String,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_run_config() -> RunConfig {
    RunConfig {
        filter: env::var("CHARREF_FIXTURE_FILTER")
            .ok()
            .filter(|value| !value.is_empty()),
        // Chunked runs are on unless explicitly disabled.
        chunked: env::var("CHARREF_FIXTURE_CHUNKED").is_err()
            || parse_env_bool("CHARREF_FIXTURE_CHUNKED"),
    }
}

fn check_case(case: &FixtureCase, run_config: &RunConfig) -> Result<(), String> {
    let input = case.read_input();
    let expected = parse_expected_decoded(&case.expected);
    let config = case.config();

    let actual = run_decode_whole(&input, config);
    if actual != expected {
        return Err(format!("[whole]\n{}", diff_lines(&expected, &actual)));
    }

    if run_config.chunked {
        let mut plans = single_split_plans(&input);
        plans.push(per_char_plan(&input));
        for plan in plans {
            let actual = run_decode_chunked(&input, config, &plan)?;
            if actual != expected {
                return Err(format!(
                    "[chunked {plan:?}]\n{}",
                    diff_lines(&expected, &actual)
                ));
            }
        }
    }
    Ok(())
}

#[test]
fn decode_fixtures() {
    let manifest_path = fixtures_root().join("manifest.txt");
    let cases = load_manifest(&manifest_path);
    assert!(!cases.is_empty(), "no fixture cases found in {manifest_path:?}");

    let run_config = load_run_config();
    let overrides = load_skip_overrides(&fixtures_root());
    let ids = cases
        .iter()
        .map(|case| case.id.clone())
        .collect::<BTreeSet<_>>();
    validate_skip_override_ids(&overrides, &ids, &manifest_path);

    let mut failures = Vec::<Failure>::new();
    let mut passed = 0usize;
    let mut skipped = 0usize;
    let mut xfailed = 0usize;

    for case in &cases {
        if let Some(filter) = &run_config.filter {
            if !case.id.contains(filter.as_str()) {
                continue;
            }
        }
        let status = overrides
            .get(&case.id)
            .map_or(case.status, |entry| entry.status);
        match (status, check_case(case, &run_config)) {
            (FixtureStatus::Skip, _) => skipped += 1,
            (FixtureStatus::Active, Ok(())) => passed += 1,
            (FixtureStatus::Active, Err(message)) => failures.push(Failure {
                id: case.id.clone(),
                message,
            }),
            (FixtureStatus::Xfail, Err(_)) => xfailed += 1,
            (FixtureStatus::Xfail, Ok(())) => failures.push(Failure {
                id: case.id.clone(),
                message: "marked xfail but passed; update the manifest".to_string(),
            }),
        }
    }

    if !failures.is_empty() {
        let mut report = format!(
            "{} fixture failures (passed={passed} skipped={skipped} xfailed={xfailed}):\n",
            failures.len()
        );
        for failure in &failures {
            report.push_str(&format!("--- {}\n{}\n", failure.id, failure.message));
        }
        panic!("{report}");
    }
    assert!(passed > 0, "no fixture cases ran");
}
