use crate::text::{is_stopword, tokenize};
use crate::{EmbedError, EmbedResult, Embedder};

const DEFAULT_DIMENSION: usize = 512;
const TERM_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.35;

/// Feature-hashing embedder over terms and character trigrams.
///
/// Each non-stopword term adds `TERM_WEIGHT` to its bucket and each trigram of
/// `#term#` adds `TRIGRAM_WEIGHT`, so "phone" and "smartphone" share mass.
/// Output is L2-normalized; text with no usable terms maps to the zero vector.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self { dimension: DEFAULT_DIMENSION }
    }
}

impl HashingEmbedder {
    pub fn with_dimension(dimension: usize) -> EmbedResult<Self> {
        if dimension == 0 {
            return Err(EmbedError::InvalidDimension(dimension));
        }
        Ok(Self { dimension })
    }

    fn bucket(&self, feature: &str) -> usize {
        (fnv1a(feature.as_bytes()) % self.dimension as u64) as usize
    }
}

impl Embedder for HashingEmbedder {
    fn name(&self) -> &'static str {
        "hashing"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        let mut v = vec![0.0f32; self.dimension];
        for term in tokenize(text) {
            if is_stopword(&term) {
                continue;
            }
            v[self.bucket(&term)] += TERM_WEIGHT;

            let padded: Vec<char> = format!("#{term}#").chars().collect();
            for w in padded.windows(3) {
                let gram: String = w.iter().collect();
                v[self.bucket(&format!("3:{gram}"))] += TRIGRAM_WEIGHT;
            }
        }
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut v {
                *x /= norm;
            }
        }
        Ok(v)
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325u64;
    for b in bytes {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
