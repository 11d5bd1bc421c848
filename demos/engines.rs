use sw_aligner::{Aligner, Engine, ScoreParams, Sequence};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One aligner per engine, identical scoring.
    let aligner = Aligner::new().with_params(ScoreParams::default());

    let seq1 = Sequence::new(b"GGTTGACTA");
    let seq2 = Sequence::new(b"TGTTACGG");

    for engine in [Engine::Scalar, Engine::Simd, Engine::Wavefront] {
        let result = aligner.clone().with_engine(engine).align(&seq1, &seq2)?;

        println!("{:?} engine:", engine);
        println!("  Score: {}", result.score);
        println!(
            "  Seq1: {}",
            String::from_utf8_lossy(&result.aligned_seq1)
        );
        println!("        {}", String::from_utf8_lossy(&result.marker));
        println!(
            "  Seq2: {}",
            String::from_utf8_lossy(&result.aligned_seq2)
        );
        println!();
    }

    Ok(())
}
