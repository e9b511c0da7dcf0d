use ece_core::{EceConfig, EceError};
use napi::bindgen_prelude::BigInt;
use napi::{Error, Status};
use napi_derive::napi;

#[napi]
pub fn version() -> String {
    format!("ece-native v{}", env!("CARGO_PKG_VERSION"))
}

fn to_napi(err: EceError) -> Error {
    let status = match &err {
        EceError::InvalidArgument(_) | EceError::LengthMismatch { .. } | EceError::Config(_) => Status::InvalidArg,
        _ => Status::GenericFailure,
    };
    Error::new(status, err.to_string())
}

/// Fingerprints cross the boundary as BigInt and must fit in 64 unsigned bits.
fn to_u64(value: &BigInt, arg: &str) -> Result<u64, EceError> {
    ece_fingerprint::from_words(value.sign_bit, &value.words).map_err(|err| match err {
        EceError::InvalidArgument(msg) => EceError::InvalidArgument(format!("{arg}: {msg}")),
        other => other,
    })
}

fn to_u64_vec(values: &[BigInt], arg: &str) -> Result<Vec<u64>, EceError> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| to_u64(v, &format!("{arg}[{i}]")))
        .collect()
}

fn parse_config(config_json: Option<String>) -> napi::Result<EceConfig> {
    match config_json {
        Some(json) => EceConfig::from_json_str(&json).map_err(to_napi),
        None => Ok(EceConfig::default()),
    }
}

// ========== Sanitizer ==========

#[napi]
pub fn cleanse(input: String) -> String {
    ece_sanitizer::cleanse(&input)
}

// ========== Atomizer ==========

#[napi]
pub fn atomize(input: String, strategy: Option<String>) -> Vec<String> {
    ece_atomizer::atomize(&input, strategy.as_deref())
}

// ========== Fingerprint ==========

#[napi]
pub fn fingerprint(input: String) -> BigInt {
    BigInt::from(ece_fingerprint::generate(&input))
}

#[napi]
pub fn distance(a: BigInt, b: BigInt) -> napi::Result<u32> {
    let a = to_u64(&a, "a").map_err(to_napi)?;
    let b = to_u64(&b, "b").map_err(to_napi)?;
    Ok(ece_fingerprint::distance(a, b))
}

/// Rejects arrays of different length instead of truncating.
#[napi]
pub fn distance_batch(a: Vec<BigInt>, b: Vec<BigInt>) -> napi::Result<Vec<u32>> {
    let a = to_u64_vec(&a, "a").map_err(to_napi)?;
    let b = to_u64_vec(&b, "b").map_err(to_napi)?;
    ece_fingerprint::distance_batch(&a, &b).map_err(to_napi)
}

// ========== Dedup ==========

#[napi(object)]
pub struct DuplicateGroup {
    pub indices: Vec<u32>,
    pub mean_distance: f64,
}

impl From<ece_dedup::DupGroup> for DuplicateGroup {
    fn from(g: ece_dedup::DupGroup) -> Self {
        Self {
            indices: g.indices.into_iter().map(|i| i as u32).collect(),
            mean_distance: g.mean_distance,
        }
    }
}

#[napi]
pub fn find_duplicates(texts: Vec<String>, max_distance: Option<u32>) -> Vec<DuplicateGroup> {
    let mut dedup = ece_dedup::Deduplicator::new();
    if let Some(d) = max_distance {
        dedup = dedup.with_max_distance(d);
    }
    dedup.find_duplicate_texts(&texts).into_iter().map(Into::into).collect()
}

#[napi(object)]
pub struct DedupResult {
    pub output: String,
    pub strategy: String,
    pub atoms_in: u32,
    pub atoms_out: u32,
    pub groups: Vec<DuplicateGroup>,
}

#[napi]
pub fn dedup_text(text: String, config_json: Option<String>) -> napi::Result<DedupResult> {
    let config = parse_config(config_json)?;
    let r = ece_dedup::Deduplicator::from_config(&config).dedup_text(&text);
    Ok(DedupResult {
        output: r.output,
        strategy: r.strategy.to_string(),
        atoms_in: r.atoms_in as u32,
        atoms_out: r.atoms_out as u32,
        groups: r.groups.into_iter().map(Into::into).collect(),
    })
}
