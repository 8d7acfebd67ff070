#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate util;

pub mod errors {
    error_chain!{
        foreign_links {
            Json(::serde_json::Error);
        }

        errors {
            InvalidChunkCount(count: usize) {
                description("invalid chunk count")
                display("Invalid chunk count {}, at least one chunk is required", count)
            }
            NoInputs {
                description("no input tables")
                display("At least one input frequency table is required")
            }
            Download(locator: String) {
                description("error downloading object")
                display("Error downloading {}", locator)
            }
            Upload(locator: String) {
                description("error uploading object")
                display("Error uploading {}", locator)
            }
            Decode(locator: String) {
                description("object is not valid UTF-8 text")
                display("Error decoding {} as UTF-8 text", locator)
            }
            Parse(locator: String) {
                description("error parsing frequency table")
                display("Error parsing frequency table {}", locator)
            }
            CountOverflow(word: String) {
                description("word count overflow")
                display("Count for word '{}' overflows", word)
            }
        }
    }
}

pub mod frequency;
pub mod mapper;
pub mod naming;
pub mod reducer;
pub mod runner;
pub mod serialise;
pub mod splitter;
pub mod tokenizer;

pub use errors::*;
pub use frequency::FrequencyTable;
pub use mapper::map_chunk;
pub use naming::{chunk_file_name, chunk_locator};
pub use reducer::reduce;
pub use runner::{run_map, run_reduce, run_split};
pub use serialise::{decode_table, encode_table};
pub use splitter::{split, Chunk, DEFAULT_CHUNK_COUNT};
