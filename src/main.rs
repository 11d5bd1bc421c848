use std::env;
use std::process;
use std::time::{Duration, Instant};

use log::info;
use sw_aligner::{fasta, report, Aligner, AlignmentResult, Engine, ScoreParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 && args.len() != 6 {
        eprintln!(
            "Usage: {} <seq1.fasta> <seq2.fasta> [match mismatch gap]",
            args[0]
        );
        process::exit(1);
    }

    let params = if args.len() == 6 {
        ScoreParams::new(args[3].parse()?, args[4].parse()?, args[5].parse()?)
    } else {
        ScoreParams::default()
    };

    let seq1 = fasta::read_fasta(&args[1])?;
    let seq2 = fasta::read_fasta(&args[2])?;
    info!("aligning {} x {} symbols", seq1.len(), seq2.len());

    let aligner = Aligner::new().with_params(params);

    let (result_scalar, time_scalar) = timed(|| aligner.align(&seq1, &seq2))?;
    println!("\nScalar Alignment:");
    print!(
        "{}",
        report::format_alignment(&result_scalar, report::DEFAULT_BLOCK_WIDTH)
    );

    let simd = aligner.clone().with_engine(Engine::Simd);
    let (result_simd, time_simd) = timed(|| simd.align(&seq1, &seq2))?;
    println!("\nSIMD Alignment:");
    print!(
        "{}",
        report::format_alignment(&result_simd, report::DEFAULT_BLOCK_WIDTH)
    );
    println!(
        "\nSIMD Speedup (vs Scalar): {:.2}X",
        time_scalar.as_secs_f64() / time_simd.as_secs_f64()
    );

    let wavefront = aligner.clone().with_engine(Engine::Wavefront);
    let (result_wavefront, time_wavefront) = timed(|| wavefront.align(&seq1, &seq2))?;
    println!("\nWavefront Alignment:");
    print!(
        "{}",
        report::format_alignment(&result_wavefront, report::DEFAULT_BLOCK_WIDTH)
    );
    println!(
        "\nWavefront Speedup (vs Scalar): {:.2}X",
        time_scalar.as_secs_f64() / time_wavefront.as_secs_f64()
    );
    println!(
        "Wavefront Speedup (vs SIMD): {:.2}X",
        time_simd.as_secs_f64() / time_wavefront.as_secs_f64()
    );

    Ok(())
}

fn timed<F>(f: F) -> Result<(AlignmentResult, Duration), sw_aligner::AlignerError>
where
    F: FnOnce() -> Result<AlignmentResult, sw_aligner::AlignerError>,
{
    let start = Instant::now();
    let result = f()?;
    Ok((result, start.elapsed()))
}
