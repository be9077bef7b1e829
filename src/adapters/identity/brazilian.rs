//! Brazilian identity values.
//!
//! Generates values in the formats seen in Brazilian customer-service
//! conversations: CPF tax ids with valid check digits, vehicle plates in the
//! Mercosul or the legacy pattern, personal names and currency amounts.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::domain::foundation::IdentityField;
use crate::ports::{IdentityError, IdentitySynthesizer};

const GIVEN_NAMES: &[&str] = &[
    "Ana", "Beatriz", "Bruno", "Camila", "Carlos", "Daniela", "Eduardo", "Fernanda", "Gabriel",
    "Helena", "João", "Juliana", "Lucas", "Mariana", "Paulo", "Rafael", "Sofia", "Thiago",
];

const FAMILY_NAMES: &[&str] = &[
    "Almeida", "Barbosa", "Carvalho", "Costa", "Ferreira", "Gomes", "Lima", "Martins", "Oliveira",
    "Pereira", "Ribeiro", "Rodrigues", "Santos", "Silva", "Souza",
];

/// Synthesizer for `cpf`, `placa`, `nome` and `valor` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrazilianIdentitySynthesizer;

impl BrazilianIdentitySynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// CPF formatted as `000.000.000-00` with both check digits valid.
    pub fn cpf(rng: &mut dyn RngCore) -> String {
        let mut digits: Vec<u32> = (0..9).map(|_| rng.gen_range(0..10)).collect();
        digits.push(cpf_check_digit(&digits));
        digits.push(cpf_check_digit(&digits));

        let d: String = digits
            .iter()
            .filter_map(|&n| char::from_digit(n, 10))
            .collect();
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }

    /// Plate in the Mercosul pattern (`ABC1D23`) or the legacy one (`ABC-1234`).
    pub fn placa(rng: &mut dyn RngCore) -> String {
        let letters: String = (0..3).map(|_| random_letter(rng)).collect();
        if rng.gen_bool(0.5) {
            let digit: u8 = rng.gen_range(0..10);
            let letter = random_letter(rng);
            let tail: u8 = rng.gen_range(0..100);
            format!("{}{}{}{:02}", letters, digit, letter, tail)
        } else {
            let number: u16 = rng.gen_range(0..10_000);
            format!("{}-{:04}", letters, number)
        }
    }

    /// Given name plus family name.
    pub fn nome(rng: &mut dyn RngCore) -> String {
        let given = GIVEN_NAMES.choose(rng).copied().unwrap_or("Maria");
        let family = FAMILY_NAMES.choose(rng).copied().unwrap_or("Silva");
        format!("{} {}", given, family)
    }

    /// Currency amount as `R$ 1.234,56`.
    pub fn valor(rng: &mut dyn RngCore) -> String {
        let cents: u64 = rng.gen_range(1_000..1_000_000);
        format!("R$ {},{:02}", group_thousands(cents / 100), cents % 100)
    }
}

impl IdentitySynthesizer for BrazilianIdentitySynthesizer {
    fn generate(
        &self,
        field: &IdentityField,
        rng: &mut dyn RngCore,
    ) -> Result<String, IdentityError> {
        match field.name() {
            IdentityField::CPF => Ok(Self::cpf(rng)),
            IdentityField::PLACA => Ok(Self::placa(rng)),
            IdentityField::NOME => Ok(Self::nome(rng)),
            IdentityField::VALOR => Ok(Self::valor(rng)),
            other => Err(IdentityError::unsupported(other)),
        }
    }
}

fn cpf_check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        r => 11 - r,
    }
}

fn random_letter(rng: &mut dyn RngCore) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}

fn group_thousands(n: u64) -> String {
    let raw = n.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
