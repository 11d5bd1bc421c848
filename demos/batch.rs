use sw_aligner::{BatchAligner, Engine, ScoreParams, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let batch = BatchAligner::new(ScoreParams::default(), Engine::Simd).with_workers(4);

    let pairs = vec![
        (Sequence::new(b"ACGTACGT"), Sequence::new(b"ACGTAGCT")),
        (Sequence::new(b"GGTTAACC"), Sequence::new(b"GGTTAACT")),
        (Sequence::new(b"GGTTGACTA"), Sequence::new(b"TGTTACGG")),
    ];

    let results = batch.align_all(&pairs)?;

    for (i, result) in results.iter().enumerate() {
        println!("Alignment {}: score = {}", i, result.score);
        println!("  {}", String::from_utf8_lossy(&result.aligned_seq1));
        println!("  {}", String::from_utf8_lossy(&result.aligned_seq2));
        println!();
    }

    Ok(())
}
