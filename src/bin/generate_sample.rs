//! Regenerate `assets/penguins.csv`, the built-in sample dataset.
//!
//! The rows are synthetic but follow the per-species means and spreads of
//! the Palmer Archipelago survey, with a small fraction of missing
//! measurements like the real data.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Per-species (count, islands, bill length, bill depth, flipper, mass)
/// with (mean, std dev) for each measurement.
struct SpeciesProfile {
    name: &'static str,
    count: usize,
    islands: &'static [&'static str],
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    flipper: (f64, f64),
    mass: (f64, f64),
}

const PROFILES: [SpeciesProfile; 3] = [
    SpeciesProfile {
        name: "Adelie",
        count: 152,
        islands: &["Torgersen", "Biscoe", "Dream"],
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper: (190.0, 6.5),
        mass: (3700.0, 460.0),
    },
    SpeciesProfile {
        name: "Chinstrap",
        count: 68,
        islands: &["Dream"],
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        flipper: (195.8, 7.1),
        mass: (3733.0, 384.0),
    },
    SpeciesProfile {
        name: "Gentoo",
        count: 124,
        islands: &["Biscoe"],
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        flipper: (217.2, 6.5),
        mass: (5076.0, 504.0),
    },
];

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "assets/penguins.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "species",
        "island",
        "bill_length_mm",
        "bill_depth_mm",
        "flipper_length_mm",
        "body_mass_g",
        "sex",
        "year",
    ])?;

    let mut rows = 0usize;
    for profile in &PROFILES {
        for _ in 0..profile.count {
            let island = profile.islands[(rng.next_u64() as usize) % profile.islands.len()];
            let year = 2007 + rng.next_u64() % 3;
            let male = rng.next_f64() < 0.5;
            // Males run a few percent larger across all measurements.
            let scale = if male { 1.04 } else { 0.96 };

            let bill_length = rng.gauss(profile.bill_length.0 * scale, profile.bill_length.1);
            let bill_depth = rng.gauss(profile.bill_depth.0 * scale, profile.bill_depth.1);
            let flipper = rng.gauss(profile.flipper.0 * scale, profile.flipper.1);
            let mass = (rng.gauss(profile.mass.0 * scale, profile.mass.1) / 25.0).round() * 25.0;

            // A few birds escaped before being fully measured.
            let (measurements, sex) = if rng.next_f64() < 0.02 {
                (["", "", "", ""].map(String::from), "")
            } else {
                let sex = if rng.next_f64() < 0.03 {
                    ""
                } else if male {
                    "male"
                } else {
                    "female"
                };
                (
                    [
                        format!("{bill_length:.1}"),
                        format!("{bill_depth:.1}"),
                        format!("{:.0}", flipper.round()),
                        format!("{mass:.0}"),
                    ],
                    sex,
                )
            };

            let year = year.to_string();
            writer.write_record([
                profile.name,
                island,
                measurements[0].as_str(),
                measurements[1].as_str(),
                measurements[2].as_str(),
                measurements[3].as_str(),
                sex,
                year.as_str(),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {rows} penguins to {output_path}");
    Ok(())
}
