//! Synthetic advisor data for demos and for bootstrapping a missing input file.

use crate::error::PipelineResult;
use crate::models::Advisor;
use crate::repositories::AdvisorWriter;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::Path;

const FIRST_NAMES: [&str; 12] = [
    "Ana", "Carlos", "Lucía", "Javier", "María", "Pablo", "Elena", "Sergio", "Carmen", "Diego",
    "Laura", "Andrés",
];

const LAST_NAMES: [&str; 12] = [
    "García", "Martínez", "López", "Sánchez", "Pérez", "Gómez", "Fernández", "Ruiz", "Díaz",
    "Moreno", "Muñoz", "Romero",
];

/// Specialties assigned to generated advisors.
pub const SPECIALTIES: [&str; 7] = [
    "Finanzas",
    "Marketing",
    "Recursos Humanos",
    "Tecnología",
    "Ventas",
    "Logística",
    "Atención al Cliente",
];

/// Locations assigned to generated advisors.
pub const LOCATIONS: [&str; 10] = [
    "Madrid",
    "Barcelona",
    "Valencia",
    "Sevilla",
    "Bilbao",
    "Málaga",
    "Zaragoza",
    "Murcia",
    "Palma",
    "Alicante",
];

const EMAIL_DOMAIN: &str = "asesorame.com";

/// Generates advisor records with realistic Spanish names and locations.
///
/// Records are valid unless an invalid ratio is set, in which case that
/// fraction gets a dashed `600-XXXX` phone number that fails validation.
pub struct SampleDataGenerator {
    rng: StdRng,
    invalid_ratio: f64,
}

impl Default for SampleDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleDataGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            invalid_ratio: 0.0,
        }
    }

    /// Deterministic generator; the same seed yields the same records.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            invalid_ratio: 0.0,
        }
    }

    /// Fraction of records (clamped to `0.0..=1.0`) that get an invalid phone.
    pub fn with_invalid_ratio(mut self, ratio: f64) -> Self {
        self.invalid_ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        self
    }

    /// Generate `count` advisors with ids `1..=count`.
    pub fn generate(&mut self, count: usize) -> Vec<Advisor> {
        (1..=count as i64).map(|id| self.advisor(id)).collect()
    }

    /// Generate `count` advisors and store them at `path` through `writer`.
    pub fn write_sample_file(
        &mut self,
        path: &Path,
        count: usize,
        writer: &dyn AdvisorWriter,
    ) -> PipelineResult<Vec<Advisor>> {
        let advisors = self.generate(count);
        writer.write_records(&advisors, path)?;
        tracing::info!(path = %path.display(), count, "Sample data generated");
        Ok(advisors)
    }

    fn advisor(&mut self, id: i64) -> Advisor {
        let first_name = pick(&mut self.rng, &FIRST_NAMES);
        let last_name = pick(&mut self.rng, &LAST_NAMES);
        let specialty = pick(&mut self.rng, &SPECIALTIES);
        let location = pick(&mut self.rng, &LOCATIONS);

        let phone = if self.invalid_ratio > 0.0 && self.rng.gen_bool(self.invalid_ratio) {
            format!("600-{:04}", self.rng.gen_range(0..10_000))
        } else {
            format!("6{:08}", self.rng.gen_range(0..100_000_000))
        };

        let email = format!(
            "{}.{}{}@{}",
            ascii_fold(first_name),
            ascii_fold(last_name),
            id,
            EMAIL_DOMAIN
        );

        Advisor::new(
            id,
            first_name,
            last_name,
            email,
            phone,
            specialty,
            location,
        )
    }
}

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Lower-case and strip Spanish diacritics so names fit an email local part.
fn ascii_fold(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => Some('a'),
            'é' | 'è' | 'ë' | 'ê' => Some('e'),
            'í' | 'ì' | 'ï' | 'î' => Some('i'),
            'ó' | 'ò' | 'ö' | 'ô' => Some('o'),
            'ú' | 'ù' | 'ü' | 'û' => Some('u'),
            'ñ' => Some('n'),
            'ç' => Some('c'),
            c if c.is_ascii_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}
