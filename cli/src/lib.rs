#[macro_use]
extern crate clap;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate util;
extern crate wordcount;

pub mod errors {
    error_chain!{
        links {
            Store(::util::errors::Error, ::util::errors::ErrorKind);
            Pipeline(::wordcount::errors::Error, ::wordcount::errors::ErrorKind);
        }

        foreign_links {
            Clap(::clap::Error);
        }
    }
}

pub mod parser;
pub mod runner;
