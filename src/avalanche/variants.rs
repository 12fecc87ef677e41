use serde::Serialize;

/// One of the six fixed transformations applied to the base input.
///
/// The declaration order is the reporting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Mutation {
    #[serde(rename = "original")]
    Original,
    #[serde(rename = "append space")]
    AppendSpace,
    #[serde(rename = "change first char")]
    ChangeFirstChar,
    #[serde(rename = "flip one bit in first byte")]
    FlipLowBit,
    #[serde(rename = "flip 0x80 bit in first byte")]
    FlipHighBit,
    #[serde(rename = "change last char")]
    ChangeLastChar,
}

impl Mutation {
    /// Every mutation, in reporting order.
    pub const ALL: [Mutation; 6] = [
        Mutation::Original,
        Mutation::AppendSpace,
        Mutation::ChangeFirstChar,
        Mutation::FlipLowBit,
        Mutation::FlipHighBit,
        Mutation::ChangeLastChar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mutation::Original => "original",
            Mutation::AppendSpace => "append space",
            Mutation::ChangeFirstChar => "change first char",
            Mutation::FlipLowBit => "flip one bit in first byte",
            Mutation::FlipHighBit => "flip 0x80 bit in first byte",
            Mutation::ChangeLastChar => "change last char",
        }
    }

    /// Applies the mutation to a copy of `input`.
    ///
    /// Empty input has nothing to mutate: every mutation, including
    /// `AppendSpace`, returns it unchanged.
    pub fn apply(self, input: &[u8]) -> Vec<u8> {
        let mut bytes = input.to_vec();

        if bytes.is_empty() {
            return bytes;
        }

        match self {
            Mutation::Original => {}
            Mutation::AppendSpace => bytes.push(b' '),
            Mutation::ChangeFirstChar => {
                if let Some(first) = bytes.first_mut() {
                    *first = b'Z';
                }
            }
            Mutation::FlipLowBit => {
                if let Some(first) = bytes.first_mut() {
                    *first ^= 0x01;
                }
            }
            Mutation::FlipHighBit => {
                if let Some(first) = bytes.first_mut() {
                    *first ^= 0x80;
                }
            }
            Mutation::ChangeLastChar => {
                if let Some(last) = bytes.last_mut() {
                    *last = b'z';
                }
            }
        }

        bytes
    }
}

/// A named transformation of the base input's UTF-8 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    pub mutation: Mutation,
    pub bytes: Vec<u8>,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        self.mutation.label()
    }
}

/// Derives the six variants of `input`, in [`Mutation::ALL`] order.
pub fn build_variants(input: &str) -> Vec<Variant> {
    let base = input.as_bytes();

    Mutation::ALL
        .iter()
        .map(|&mutation| Variant {
            mutation,
            bytes: mutation.apply(base),
        })
        .collect()
}
