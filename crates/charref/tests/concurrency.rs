use std::sync::Barrier;
use std::thread;

use charref::{Trie, load, match_longest};

#[test]
fn concurrent_first_use_builds_one_trie() {
    const THREADS: usize = 8;
    let barrier = Barrier::new(THREADS);
    let addresses = thread::scope(|scope| {
        let handles = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    load() as *const Trie as usize
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("loader thread panicked"))
            .collect::<Vec<_>>()
    });
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    assert!(charref::is_loaded());
}

#[test]
fn concurrent_matching_is_deterministic() {
    let inputs = ["notin;", "notit=5", "amp", "NotEqualTilde;", "copy2024", "zz;"];
    let expected = inputs
        .iter()
        .flat_map(|input| [match_longest(input, false), match_longest(input, true)])
        .collect::<Vec<_>>();
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let actual = inputs
                        .iter()
                        .flat_map(|input| {
                            [match_longest(input, false), match_longest(input, true)]
                        })
                        .collect::<Vec<_>>();
                    assert_eq!(actual, expected);
                }
            });
        }
    });
}
