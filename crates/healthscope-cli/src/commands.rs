//! Subcommand implementations.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use healthscope_core::hotspots::{HotspotAtlas, LayerRegistry};
use healthscope_core::regions::{district_options, Division};
use healthscope_core::tips::health_tips;
use healthscope_core::{
    AnalysisSession, CaseReportForm, CommunityBoard, ConditionCatalog, SessionConfig,
};
use tracing::{debug, info};

use crate::cli::{AnalyzeArgs, DistrictsArgs, HotspotsArgs, ReportArgs, SymptomsArgs};

/// Load the session config file, then apply the `--delay-ms` override.
pub fn load_session_config(path: Option<&Path>, delay_ms: Option<u64>) -> Result<SessionConfig> {
    let mut config = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SessionConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => SessionConfig::default(),
    };

    if let Some(delay_ms) = delay_ms {
        config.analysis_delay_ms = delay_ms;
    }

    debug!(?config, "session config");
    Ok(config)
}

pub fn run_symptoms(args: &SymptomsArgs) -> Result<()> {
    let catalog = ConditionCatalog::builtin().context("built-in catalog is invalid")?;

    let symptoms = match &args.search {
        Some(term) => catalog.search_symptoms(term),
        None => catalog.symptoms().iter().collect(),
    };

    if symptoms.is_empty() {
        println!("No symptoms found.");
        return Ok(());
    }

    for symptom in symptoms {
        println!("{:<22} {}", symptom.id, symptom.label);
    }
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs, config: SessionConfig) -> Result<()> {
    let catalog = ConditionCatalog::builtin().context("built-in catalog is invalid")?;
    let mut session = AnalysisSession::with_config(Arc::new(catalog), config);

    for symptom in &args.symptoms {
        session.select(symptom);
    }

    info!(selected = session.selected().len(), "analyzing symptoms");
    let summary = session.summarize();

    if args.json {
        println!("{}", summary.to_json()?);
    } else {
        print!("{}", summary.to_text());
    }
    Ok(())
}

pub fn run_districts(args: &DistrictsArgs) -> Result<()> {
    let division: Division = args
        .division
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    println!("{}", division.label());
    for option in district_options(division) {
        println!("  {:<16} {}", option.value, option.label);
    }
    Ok(())
}

pub fn run_hotspots(args: &HotspotsArgs) -> Result<()> {
    let atlas = HotspotAtlas::builtin().context("built-in hotspot atlas is invalid")?;
    let mut layers = LayerRegistry::new(Arc::new(atlas));

    if !args.show.is_empty() {
        layers.set_all_visible(false);
        for key in &args.show {
            layers
                .set_visible(key, true)
                .with_context(|| format!("cannot show layer '{}'", key))?;
        }
    }
    if args.red {
        layers.apply_red_gradient();
    }

    for layer in layers.visible_layers() {
        let gradient = layers.gradient(&layer.key).unwrap_or_default();
        let peak = gradient.last().map(|stop| stop.color.as_str()).unwrap_or("-");
        println!(
            "{:<16} {:>3} points  peak {}  {}",
            layer.key,
            layer.points.len(),
            peak,
            layer.label
        );
    }

    if let Some(stats) = layers.statistics() {
        println!();
        println!("Statistics ({})", layers.statistics_key());
        println!("  Total cases:  {}", stats.total);
        println!("  Hotspots:     {}", stats.hotspots);
        println!("  Areas:        {}", stats.areas);
        println!("  Severity:     {}", stats.severity);
    }
    Ok(())
}

/// Returns whether the report was accepted.
pub fn run_report(args: &ReportArgs) -> Result<bool> {
    let form = CaseReportForm {
        disease_type: args.disease.clone(),
        severity: args.severity.clone(),
        division: args.division.clone(),
        district: args.district.clone(),
    };

    let mut board = CommunityBoard::new();
    let toast = board.submit(&form);
    println!("{}", toast.message);

    if let Some(report) = board.latest() {
        println!("{}", serde_json::to_string_pretty(report)?);
    }
    Ok(toast.is_success())
}

pub fn run_tips() -> Result<()> {
    for tip in health_tips() {
        println!("{} {}", tip.icon, tip.title);
        println!("   {}", tip.description);
    }
    Ok(())
}
