// Cross-engine contract: every engine must report the scalar oracle's
// score on every input. A divergence here is a programming defect in the
// diverging engine, not a runtime condition.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use sw_aligner::traceback::GAP_BYTE;
use sw_aligner::{Aligner, AlignmentResult, Engine, Position, ScoreParams, Sequence};

const ENGINES: [Engine; 3] = [Engine::Scalar, Engine::Simd, Engine::Wavefront];

fn random_seq(rng: &mut StdRng, len: usize) -> Sequence {
    const ALPHABET: [u8; 4] = *b"ACGT";
    Sequence::from(
        (0..len)
            .map(|_| ALPHABET[rng.gen_range(0..4)])
            .collect::<Vec<u8>>(),
    )
}

fn align_with(engine: Engine, seq1: &Sequence, seq2: &Sequence) -> AlignmentResult {
    Aligner::new()
        .with_engine(engine)
        .align(seq1, seq2)
        .unwrap()
}

fn strip_gaps(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|&c| c != GAP_BYTE).collect()
}

#[test]
fn all_engines_reproduce_the_reference_score() {
    let seq1 = Sequence::new(b"GGTTGACTA");
    let seq2 = Sequence::new(b"TGTTACGG");

    for engine in ENGINES {
        let result = align_with(engine, &seq1, &seq2);
        assert_eq!(result.score, 8, "wrong score from {:?}", engine);
        assert_eq!(result.aligned_seq1, b"GTTGAC");
        assert_eq!(result.aligned_seq2, b"GTT-AC");
        assert_eq!(result.marker, b"||| ||");
    }
}

#[test]
fn engines_report_identical_scores_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..60 {
        let len1 = rng.gen_range(1..100);
        let seq1 = random_seq(&mut rng, len1);
        let len2 = rng.gen_range(1..100);
        let seq2 = random_seq(&mut rng, len2);

        let scalar = align_with(Engine::Scalar, &seq1, &seq2);
        for engine in [Engine::Simd, Engine::Wavefront] {
            let result = align_with(engine, &seq1, &seq2);
            assert_eq!(
                result.score,
                scalar.score,
                "{:?} diverged from scalar on {} vs {}",
                engine,
                String::from_utf8_lossy(seq1.as_bytes()),
                String::from_utf8_lossy(seq2.as_bytes())
            );
        }
    }
}

#[test]
fn aligned_strings_reproduce_substrings_of_the_inputs() {
    let mut rng = StdRng::seed_from_u64(1729);
    for _ in 0..40 {
        let len1 = rng.gen_range(1..60);
        let seq1 = random_seq(&mut rng, len1);
        let len2 = rng.gen_range(1..60);
        let seq2 = random_seq(&mut rng, len2);

        for engine in ENGINES {
            let result = align_with(engine, &seq1, &seq2);
            if result.end.i < 0 {
                assert!(result.aligned_seq1.is_empty());
                continue;
            }
            let (s1, e1) = (result.start.i as usize, result.end.i as usize);
            let (s2, e2) = (result.start.j as usize, result.end.j as usize);
            assert_eq!(strip_gaps(&result.aligned_seq1), seq1.as_bytes()[s1..=e1]);
            assert_eq!(strip_gaps(&result.aligned_seq2), seq2.as_bytes()[s2..=e2]);
        }
    }
}

#[test]
fn marker_line_matches_the_aligned_pairs() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..40 {
        let len1 = rng.gen_range(1..60);
        let seq1 = random_seq(&mut rng, len1);
        let len2 = rng.gen_range(1..60);
        let seq2 = random_seq(&mut rng, len2);

        for engine in ENGINES {
            let result = align_with(engine, &seq1, &seq2);
            assert_eq!(result.aligned_seq1.len(), result.aligned_seq2.len());
            assert_eq!(result.aligned_seq1.len(), result.marker.len());

            for ((&a, &b), &mark) in result
                .aligned_seq1
                .iter()
                .zip(&result.aligned_seq2)
                .zip(&result.marker)
            {
                let expected = if a == GAP_BYTE || b == GAP_BYTE {
                    b' '
                } else if a == b {
                    b'|'
                } else {
                    b'*'
                };
                assert_eq!(mark, expected);
            }
        }
    }
}

#[test]
fn engines_are_idempotent() {
    let seq1 = Sequence::new(b"GGTTGACTAGGTTGACTA");
    let seq2 = Sequence::new(b"TGTTACGGTGTTACGG");

    for engine in ENGINES {
        let first = align_with(engine, &seq1, &seq2);
        let second = align_with(engine, &seq1, &seq2);
        assert_eq!(first, second, "{:?} is not deterministic", engine);
    }
}

#[test]
fn empty_sequences_yield_the_shared_empty_result() {
    let empty = Sequence::new(b"");
    let other = Sequence::new(b"ACGT");

    for engine in ENGINES {
        for (a, b) in [(&empty, &other), (&other, &empty), (&empty, &empty)] {
            let result = align_with(engine, a, b);
            assert_eq!(result.score, 0);
            assert!(result.aligned_seq1.is_empty());
            assert!(result.aligned_seq2.is_empty());
            assert_eq!(result.start, Position { i: 0, j: 0 });
            assert_eq!(result.end, Position { i: -1, j: -1 });
        }
    }
}

#[test]
fn identical_sequences_align_end_to_end() {
    let seq = Sequence::new(b"TGCATGCATGCATGCA");
    let len = seq.len() as i32;

    for engine in ENGINES {
        let result = align_with(engine, &seq, &seq);
        assert_eq!(result.score, 2 * len);
        assert_eq!(result.aligned_seq1, seq.as_bytes());
        assert_eq!(result.aligned_seq2, seq.as_bytes());
        assert!(result.marker.iter().all(|&b| b == b'|'));
        assert_eq!(result.start, Position { i: 0, j: 0 });
        assert_eq!(result.end, Position { i: len - 1, j: len - 1 });
    }
}

#[test]
fn engines_agree_under_non_default_scoring() {
    let params = ScoreParams::new(3, -2, -1);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let len1 = rng.gen_range(1..50);
        let seq1 = random_seq(&mut rng, len1);
        let len2 = rng.gen_range(1..50);
        let seq2 = random_seq(&mut rng, len2);

        let scalar = Aligner::new()
            .with_params(params)
            .align(&seq1, &seq2)
            .unwrap();
        for engine in [Engine::Simd, Engine::Wavefront] {
            let result = Aligner::new()
                .with_params(params)
                .with_engine(engine)
                .align(&seq1, &seq2)
                .unwrap();
            assert_eq!(result.score, scalar.score);
        }
    }
}
