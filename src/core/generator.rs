use crate::domain::{Place, Row, Temperature};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces random rows: a uniform place from [`Place::ALL`] and a uniform
/// temperature in `[-100.0, 100.0)` at one decimal digit.
pub struct LineGenerator {
    rng: StdRng,
}

impl LineGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn random_place(&mut self) -> Place {
        Place::ALL[self.rng.random_range(0..Place::ALL.len())]
    }

    pub fn random_temperature(&mut self) -> Temperature {
        Temperature(
            self.rng
                .random_range(Temperature::MIN_TENTHS..Temperature::MAX_TENTHS),
        )
    }

    pub fn next_row(&mut self) -> Row<'static> {
        Row {
            place_name: self.random_place().as_str(),
            temperature: self.random_temperature(),
        }
    }

    /// One formatted line without the terminator. An empty `place_name` counts as no
    /// override. The temperature is drawn either way.
    pub fn gen_one_line(&mut self, place_name: Option<&str>) -> String {
        let place_name = match place_name.filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => self.random_place().as_str(),
        };
        Row {
            place_name,
            temperature: self.random_temperature(),
        }
        .to_string()
    }
}
