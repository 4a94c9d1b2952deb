//! Benchmark entrypoint: evaluates a synthetic dataset through every path.

use std::time::Instant;

use anyhow::{Context, bail};
use mimalloc::MiMalloc;
use serde::Serialize;

use hashrank::config::EvalConfig;
use hashrank::metrics::{
    MapResult, Relevance, mean_average_precision_from_hashes_with, mean_average_precision_with,
};
use hashrank::ranking::hamming_rank;
use hashrank::synthetic::{generate, one_hot};
use hashrank::{Label, reference};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Serialize)]
struct Timings {
    generate_ms: f64,
    rank_path_ms: f64,
    hash_path_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_ms: Option<f64>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    db_size: usize,
    query_size: usize,
    hash_bits: usize,
    top_n: usize,
    relevance: Relevance,
    verified: bool,
    timings: Timings,
    result: &'a MapResult,
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = EvalConfig::from_env()?;
    config.validate()?;

    tracing::info!(
        db_size = config.db_size,
        query_size = config.query_size,
        hash_bits = config.hash_bits,
        top_n = config.top_n,
        relevance = %config.relevance,
        "hashrank evaluation starting"
    );

    let started = Instant::now();
    let mut data = generate(&config.synthetic_spec());
    if config.relevance == Relevance::SharedBits {
        let encode = |labels: &mut Vec<Label>| labels.iter_mut().for_each(|l| *l = one_hot(*l));
        encode(&mut data.labels_db);
        encode(&mut data.labels_query);
    }
    let generate_ms = elapsed_ms(started);

    let db = data.db().context("database hashes")?;
    let query = data.query().context("query hashes")?;

    let started = Instant::now();
    let rank = hamming_rank(&db, &query)?;
    let from_rank = mean_average_precision_with(
        &rank,
        &data.labels_db,
        &data.labels_query,
        config.top_n,
        config.relevance,
    )?;
    let rank_path_ms = elapsed_ms(started);
    drop(rank);

    let started = Instant::now();
    let from_hashes = mean_average_precision_from_hashes_with(
        &db,
        &query,
        &data.labels_db,
        &data.labels_query,
        config.top_n,
        config.relevance,
    )?;
    let hash_path_ms = elapsed_ms(started);

    if from_rank != from_hashes {
        bail!(
            "rank path (mAP {}) and hash path (mAP {}) disagree",
            from_rank.map,
            from_hashes.map
        );
    }

    let mut reference_ms = None;
    if config.verify {
        let started = Instant::now();
        let oracle = reference::mean_average_precision(
            &db,
            &query,
            &data.labels_db,
            &data.labels_query,
            config.top_n,
            config.relevance,
        )?;
        reference_ms = Some(elapsed_ms(started));

        if oracle != from_hashes {
            bail!(
                "reference (mAP {}) and fast path (mAP {}) disagree",
                oracle.map,
                from_hashes.map
            );
        }
        tracing::info!("Reference implementation agrees");
    }

    tracing::info!(
        map = from_hashes.map,
        contributing = from_hashes.contributing_queries,
        rank_path_ms,
        hash_path_ms,
        "Evaluation complete"
    );

    let report = Report {
        db_size: config.db_size,
        query_size: config.query_size,
        hash_bits: config.hash_bits,
        top_n: from_hashes.top_n(),
        relevance: config.relevance,
        verified: config.verify,
        timings: Timings {
            generate_ms,
            rank_path_ms,
            hash_path_ms,
            reference_ms,
        },
        result: &from_hashes,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
