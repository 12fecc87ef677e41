use serde::Serialize;
use tracing::trace;

use crate::encoding::{bytes_to_hex, hex_to_bits};
use crate::error::Result;
use crate::hash::{DIGEST_LEN, DigestProvider, Sha256};

use super::distance::HammingComparison;
use super::variants::{Mutation, build_variants};

/// The digest of one variant and its two textual encodings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DigestResult {
    #[serde(rename = "name")]
    pub mutation: Mutation,
    /// Lowercase hex, 64 characters.
    pub hex: String,
    /// Binary, 256 characters, MSB first within each byte.
    pub bits: String,
    pub bytes: [u8; DIGEST_LEN],
}

impl DigestResult {
    pub fn name(&self) -> &'static str {
        self.mutation.label()
    }
}

/// One line of the comparison table.
///
/// `comparison` is `None` for the original row: it is the reference, not
/// a zero-distance variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AvalancheRow {
    #[serde(flatten)]
    pub result: DigestResult,
    pub comparison: Option<HammingComparison>,
}

/// Output of [`AvalancheAnalyzer::run`]: six rows in [`Mutation::ALL`] order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AvalancheReport {
    pub input: String,
    pub rows: Vec<AvalancheRow>,
}

impl AvalancheReport {
    /// Digest results in reporting order.
    pub fn results(&self) -> impl Iterator<Item = &DigestResult> {
        self.rows.iter().map(|row| &row.result)
    }

    /// The reference row, if present.
    pub fn original(&self) -> Option<&DigestResult> {
        self.results().find(|r| r.mutation == Mutation::Original)
    }

    /// Comparisons for the mutated rows, in reporting order.
    pub fn comparisons(&self) -> impl Iterator<Item = (Mutation, HammingComparison)> + '_ {
        self.rows
            .iter()
            .filter_map(|row| row.comparison.map(|c| (row.result.mutation, c)))
    }

    /// Mean Hamming distance over the mutated rows.
    pub fn mean_distance(&self) -> Option<f64> {
        let (sum, count) = self
            .comparisons()
            .fold((0u32, 0u32), |(sum, count), (_, c)| (sum + c.distance, count + 1));

        (count > 0).then(|| f64::from(sum) / f64::from(count))
    }
}

/// Digests a base input and its mutations and compares the results.
///
/// Stateless; the provider is only borrowed per call.
#[derive(Clone, Debug, Default)]
pub struct AvalancheAnalyzer<D = Sha256> {
    provider: D,
}

impl AvalancheAnalyzer<Sha256> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DigestProvider> AvalancheAnalyzer<D> {
    pub fn with_provider(provider: D) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &D {
        &self.provider
    }

    /// Applies the configured 256-bit digest.
    ///
    /// # Errors
    /// [`crate::Error::Digest`] on an unexpected backend failure.
    pub fn digest(&self, bytes: &[u8]) -> Result<[u8; DIGEST_LEN]> {
        self.provider.digest(bytes)
    }

    /// Digests one variant.
    pub fn digest_variant(&self, mutation: Mutation, bytes: &[u8]) -> Result<DigestResult> {
        let digest = self.digest(bytes)?;
        let hex = bytes_to_hex(&digest);
        let bits = hex_to_bits(&hex)?;

        trace!(variant = mutation.label(), len = bytes.len(), digest = %hex, "digested variant");

        Ok(DigestResult {
            mutation,
            hex,
            bits,
            bytes: digest,
        })
    }

    /// Builds the six variants of `input`, digests each, and compares every
    /// mutated digest against the original one.
    pub fn run(&self, input: &str) -> Result<AvalancheReport> {
        let results = build_variants(input)
            .into_iter()
            .map(|variant| self.digest_variant(variant.mutation, &variant.bytes))
            .collect::<Result<Vec<_>>>()?;

        let original_bits = results
            .iter()
            .find(|r| r.mutation == Mutation::Original)
            .map(|r| r.bits.clone())
            .unwrap_or_default();

        let rows = results
            .into_iter()
            .map(|result| {
                let comparison = (result.mutation != Mutation::Original)
                    .then(|| HammingComparison::between(&original_bits, &result.bits));

                AvalancheRow { result, comparison }
            })
            .collect();

        Ok(AvalancheReport {
            input: input.to_string(),
            rows,
        })
    }
}
