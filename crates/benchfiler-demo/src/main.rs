use std::f32::consts::TAU;
use std::fs::{self, File};
use std::hint::black_box;

use anyhow::{Context, Result};
use benchfiler::clock::MonotonicClock;
use benchfiler::logging::{LoggingConfig, init_logging};
use benchfiler::timer::{Timer, TimerConfig};

const TMPFILE_ITERATIONS: u32 = 1_000;

const FRAMES: u32 = 180;
const REPORT_EVERY: u32 = 60;
const SUBSTEPS: u32 = 4;
const PARTICLES: usize = 4_096;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::debug!("running demo scenarios");

    tmpfile_scenario()?;
    frame_scenario()?;

    Ok(())
}

/// Times creating and closing a temp file, a thousand times over.
fn tmpfile_scenario() -> Result<()> {
    println!();
    println!("  [tmpfile] {TMPFILE_ITERATIONS} x create + close + remove");
    println!();

    let mut timer = Timer::with_config(MonotonicClock::new(), TimerConfig::labeled("tmpfile"))?;
    let path = std::env::temp_dir().join(format!("benchfiler-demo-{}.tmp", std::process::id()));

    for _ in 0..TMPFILE_ITERATIONS {
        timer.begin();
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        drop(file);
        fs::remove_file(&path).with_context(|| format!("removing {}", path.display()))?;
        timer.end();
    }

    timer.report()?;
    Ok(())
}

#[derive(Debug, Copy, Clone, Default)]
struct Particle {
    pos: [f32; 2],
    vel: [f32; 2],
}

/// Times a particle integration step inside a simulated frame loop,
/// reporting once per "second" of frames.
fn frame_scenario() -> Result<()> {
    println!();
    println!("  [frame] {FRAMES} frames, {SUBSTEPS} substeps, report every {REPORT_EVERY}");
    println!();

    let mut timer = Timer::with_config(MonotonicClock::new(), TimerConfig::labeled("integrate"))?;
    let mut particles = spawn_particles(PARTICLES);
    let dt = 1.0 / (60.0 * SUBSTEPS as f32);

    for frame in 1..=FRAMES {
        for _ in 0..SUBSTEPS {
            timer.measure(|| integrate(black_box(&mut particles), dt));
        }

        if frame % REPORT_EVERY == 0 {
            println!("  frame {frame}:");
            timer.report()?;
        }
    }

    Ok(())
}

fn spawn_particles(n: usize) -> Vec<Particle> {
    (0..n)
        .map(|i| {
            let t = i as f32 / n as f32;
            Particle {
                pos: [t * 100.0, 0.0],
                vel: [(t * TAU).cos() * 5.0, (t * TAU).sin() * 5.0 + 10.0],
            }
        })
        .collect()
}

fn integrate(particles: &mut [Particle], dt: f32) {
    const GRAVITY: f32 = -9.81;

    for p in particles.iter_mut() {
        p.vel[1] += GRAVITY * dt;
        p.pos[0] += p.vel[0] * dt;
        p.pos[1] += p.vel[1] * dt;

        // Bounce off the floor.
        if p.pos[1] < 0.0 {
            p.pos[1] = -p.pos[1];
            p.vel[1] = -p.vel[1] * 0.8;
        }
    }
}
