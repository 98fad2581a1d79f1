use charref::{DecodeTextConfig, EntityRecord, TextDecoder, decode_text, load, match_longest};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

const DOC_REPEATS: usize = 2_000;

fn make_document(repeats: usize) -> String {
    let mut doc = String::with_capacity(repeats * 96);
    for i in 0..repeats {
        doc.push_str("<p title=\"a&amp;b&copy=1\">Fish &amp; chips &notin; set, ");
        doc.push_str("&NotEqualTilde; &#x1F4A9; &#128; &bogus; plain text ");
        if i % 7 == 0 {
            doc.push_str("&CounterClockwiseContourIntegral;");
        }
        doc.push_str("</p>\n");
    }
    doc
}

fn bench_trie_build(c: &mut Criterion) {
    let records = charref::entities().copied().collect::<Vec<EntityRecord>>();
    c.bench_function("bench_trie_build", |b| {
        b.iter(|| {
            let trie = charref::trie::build(black_box(&records)).expect("canonical table");
            black_box(trie.node_count());
        });
    });
}

fn bench_match_longest(c: &mut Criterion) {
    load();
    let inputs = [
        "amp;",
        "notin;",
        "notit=5",
        "NotEqualTilde;",
        "CounterClockwiseContourIntegral;",
        "zzzznotreal;",
    ];
    c.bench_function("bench_match_longest", |b| {
        b.iter(|| {
            for input in inputs {
                black_box(match_longest(black_box(input), false));
                black_box(match_longest(black_box(input), true));
            }
        });
    });
}

fn bench_decode_text(c: &mut Criterion) {
    load();
    let input = make_document(DOC_REPEATS);
    c.bench_function("bench_decode_text", |b| {
        b.iter(|| {
            let out = decode_text(black_box(&input), DecodeTextConfig::default());
            black_box(out.len());
        });
    });
}

fn bench_decode_text_chunked(c: &mut Criterion) {
    load();
    let input = make_document(DOC_REPEATS);
    let chunk_sizes = [1usize, 2, 3, 7, 64, 128, 256, 1024];
    c.bench_function("bench_decode_text_chunked", |b| {
        b.iter_batched(
            || TextDecoder::new(DecodeTextConfig::default()),
            |mut decoder| {
                let mut out = String::with_capacity(input.len());
                let mut offset = 0usize;
                let mut size_idx = 0usize;
                while offset < input.len() {
                    let size = chunk_sizes[size_idx % chunk_sizes.len()];
                    let mut end = (offset + size).min(input.len());
                    while !input.is_char_boundary(end) {
                        end += 1;
                    }
                    decoder.push_str(&input[offset..end], &mut out);
                    offset = end;
                    size_idx += 1;
                }
                decoder.finish(&mut out);
                black_box(out);
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_decode_text_no_references(c: &mut Criterion) {
    let input = "plain text without any references at all. ".repeat(4096);
    c.bench_function("bench_decode_text_no_references", |b| {
        b.iter(|| {
            let out = decode_text(black_box(&input), DecodeTextConfig::default());
            black_box(out.len());
        });
    });
}

criterion_group!(
    benches,
    bench_trie_build,
    bench_match_longest,
    bench_decode_text,
    bench_decode_text_chunked,
    bench_decode_text_no_references
);
criterion_main!(benches);
