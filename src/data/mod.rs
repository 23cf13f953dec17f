pub mod ingestion;
pub mod processing;

pub use ingestion::{LlamaClient, ProtocolSource};
pub use processing::{merge_chain_tvls, MergedTvl, MERGED_CHAINS};
