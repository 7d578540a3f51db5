#[macro_use]
extern crate tracing;

use anyhow::Result;
use bcnf_decomposition::{attrs, fd, bcnf_decompose_tree, utils, AttrSet, FdSet, NormalizeResult};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use ptree::print_tree;
use serde_json::json;
use std::{fs::File, io::BufWriter, path::PathBuf, time::Instant};

#[derive(Debug, Parser)]
struct Args {
    /// Example schema to normalize
    #[clap(short, long, value_enum, default_value = "course")]
    example: Example,

    /// Output file for the JSON result
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Example {
    /// U(A, B, C, D, E) with AE -> D, AB -> C, D -> B
    Course,
    /// S(A, B, C, D) with A -> B, B -> C
    Chain,
    /// R(A, B, C) with A -> B C, already in BCNF
    Flat,
}

impl Example {
    fn schema(self) -> (AttrSet, FdSet) {
        match self {
            Self::Course => (
                attrs!("A" "B" "C" "D" "E"),
                FdSet::from([fd!("A" "E" => "D"), fd!("A" "B" => "C"), fd!("D" => "B")]),
            ),
            Self::Chain => (
                attrs!("A" "B" "C" "D"),
                FdSet::from([fd!("A" => "B"), fd!("B" => "C")]),
            ),
            Self::Flat => (attrs!("A" "B" "C"), FdSet::from([fd!("A" => "B" "C")])),
        }
    }
}

fn main() -> Result<()> {
    utils::init_tracing_subscriber("info")?;
    let args = Args::parse();
    info!("args: {:#?}", args);

    let (rel, fds) = args.example.schema();
    println!("Schema: {{{rel}}}");
    println!("FDs: {fds}");

    let begin = Instant::now();
    let tree = bcnf_decompose_tree(&rel, &fds)?;
    let decompose_time = Instant::now() - begin;

    let schemas = tree.schemas();
    print_tree(&tree)?;
    println!(
        "Final BCNF schemas: {}",
        schemas.iter().map(|s| format!("{{{s}}}")).join(", ")
    );
    info!("decomposed in {:?}", decompose_time);

    let result = NormalizeResult {
        decompose_time,
        num_of_schemas: schemas.len(),
        schemas,
    };

    if let Some(output) = &args.output {
        let mut result_json = serde_json::to_value(&result)?;
        result_json.as_object_mut().unwrap().append(
            json!({
                "example": format!("{:?}", args.example).to_lowercase(),
            })
            .as_object_mut()
            .unwrap(),
        );

        let out = BufWriter::new(File::create(output)?);
        serde_json::to_writer(out, &result_json)?;
    }

    Ok(())
}
