use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use decor::{CaseDamage, DamageKind, Profile};
use gauge::{FilmCounter, LedGauge, Tally};

mod dump;
use dump::Format;

pub const APP_NAME: &str = "hauntkit";

#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
enum Args {
    /// Print surface damage descriptors.
    Damage(DamageParam),
    /// Show the film counter reading for a number of shots.
    Film {
        #[arg(allow_negative_numbers = true)]
        shots: i32,
    },
    /// Show an LED charge gauge.
    Led {
        #[arg(allow_negative_numbers = true)]
        count: i32,
        #[arg(long, default_value_t = 99, allow_negative_numbers = true)]
        max: i32,
    },
    /// Show a charm count as tally marks.
    Charms {
        #[arg(allow_negative_numbers = true)]
        charms: i32,
    },
    /// Load texture files and report which ones decode.
    Preload {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

#[derive(Parser, Debug)]
struct DamageParam {
    /// Only generate this kind of damage.
    #[arg(long)]
    kind: Option<DamageKind>,

    /// Number of elements, the kind's default if omitted.
    #[arg(long, requires = "kind", allow_negative_numbers = true)]
    count: Option<i32>,

    /// IDM file with per-kind element counts.
    #[arg(long, value_name = "FILE", conflicts_with = "kind")]
    profile: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match Args::parse() {
        Args::Damage(param) => damage(param),
        Args::Film { shots } => {
            println!("{}", FilmCounter::new(shots));
            Ok(())
        }
        Args::Led { count, max } => {
            let led = LedGauge::new(count, max);
            println!("{led} {}/{}", led.active_segments(), gauge::SEGMENTS);
            Ok(())
        }
        Args::Charms { charms } => {
            let tally = Tally::new(charms);
            println!("{tally} ({})", *tally);
            Ok(())
        }
        Args::Preload { paths } => preload(&paths),
    }
}

fn damage(param: DamageParam) -> anyhow::Result<()> {
    let text = if let Some(kind) = param.kind {
        let elts = kind.generate(param.count);
        log::info!("generated {} {kind} elements", elts.len());
        dump::elements(&elts, param.format)?
    } else {
        let profile = match &param.profile {
            Some(path) => Profile::load(path)?,
            None => Profile::default(),
        };
        let damage = CaseDamage::from_profile(&profile);
        log::info!("generated case damage with {} elements", damage.len());
        dump::case_damage(&damage, param.format)?
    };

    print!("{text}");
    Ok(())
}

fn preload(paths: &[PathBuf]) -> anyhow::Result<()> {
    let loaded = gfx::preload(paths, |p| {
        log::info!(
            "[{}/{}] {} {}",
            p.done,
            p.total,
            p.path.display(),
            if p.ok { "ok" } else { "FAILED" }
        );
    });

    let failed = loaded.iter().filter(|a| !a.is_ok()).count();
    if failed > 0 {
        bail!("{failed} of {} textures failed to load", loaded.len());
    }
    Ok(())
}
