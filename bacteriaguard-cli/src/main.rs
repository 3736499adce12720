mod cli;
mod logging;
mod output;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use bacteriaguard_appcore::AppService;
use bacteriaguard_core::config::AppConfig;
use bacteriaguard_core::content::{common_symptoms, hero, quick_tips};
use bacteriaguard_core::report::IncidentReport;
use bacteriaguard_engine::education::EducationPanel;
use bacteriaguard_engine::report::ReportForm;
use bacteriaguard_engine::session::{ScanSession, ScanStatus};
use bacteriaguard_engine::traits::{Clock, Notifier, ScanStatusPayload, StatusSink};
use bacteriaguard_platform::console::{
    ConsoleNotifier, ConsoleStatusSink, JsonStatusSink, LogNotifier,
};
use bacteriaguard_runtime::clock::{InstantClock, TokioClock};
use bacteriaguard_runtime::config_store::ConfigStore;
use bacteriaguard_runtime::defaults::default_app_config;
use bacteriaguard_runtime::random::random_source;

use crate::cli::{Cli, Commands, ConfigAction, ReportArgs, ScanArgs, TopicsArgs};
use crate::output::{CategoriesView, ListView, OutputWriter, SitePage, TopicsView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let store = ConfigStore::at_path(&cli.config);
    let out = OutputWriter::new(cli.json);

    // `config init` must work even when the existing file no longer decodes.
    if let Commands::Config {
        action: ConfigAction::Init { force },
    } = cli.command
    {
        logging::init_logging(&default_app_config().log_level);
        return init_config(&store, force, &out);
    }

    let config = store.load_or_default()?;
    logging::init_logging(&config.log_level);
    log::debug!("config: {}", store.path().display());

    match cli.command {
        Commands::Site => {
            let panel = EducationPanel::new();
            let idle = ScanStatusPayload::from_session(&ScanSession::new(), 0, None);
            let page = SitePage::new(hero(), idle, TopicsView::from_panel(&panel)?, tips());
            out.render(&page)?;
        }
        Commands::Scan(args) => run_scan(config, args, &out).await?,
        Commands::Topics(args) => run_topics(args, &out)?,
        Commands::Tips => out.render(&tips())?,
        Commands::Symptoms => out.render(&ListView {
            title: "Symptoms Experienced",
            items: common_symptoms().to_vec(),
        })?,
        Commands::Categories => out.render(&CategoriesView::all())?,
        Commands::Report(args) => run_report(args, &out)?,
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => init_config(&store, force, &out)?,
            ConfigAction::Show => out.render(&config)?,
        },
    }

    Ok(())
}

fn init_config(store: &ConfigStore, force: bool, out: &OutputWriter) -> anyhow::Result<()> {
    if store.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            store.path().display()
        );
    }
    store.save(&default_app_config())?;
    if !out.is_json() {
        println!("wrote {}", store.path().display());
    }
    Ok(())
}

fn tips() -> ListView {
    ListView {
        title: "Daily Prevention",
        items: quick_tips().to_vec(),
    }
}

fn run_topics(args: TopicsArgs, out: &OutputWriter) -> anyhow::Result<()> {
    let mut panel = EducationPanel::new();
    for n in args.expand {
        let index = n
            .checked_sub(1)
            .with_context(|| format!("topic numbers start at 1, got {n}"))?;
        panel.toggle(index)?;
    }
    out.render(&TopicsView::from_panel(&panel)?)
}

async fn run_scan(mut config: AppConfig, args: ScanArgs, out: &OutputWriter) -> anyhow::Result<()> {
    if args.seed.is_some() {
        config.random_seed = args.seed;
    }
    let clock: Arc<dyn Clock> = if args.instant {
        Arc::new(InstantClock)
    } else {
        Arc::new(TokioClock)
    };
    let sink: Arc<dyn StatusSink> = if out.is_json() {
        Arc::new(JsonStatusSink)
    } else {
        Arc::new(ConsoleStatusSink)
    };

    let random = random_source(config.random_seed);
    let svc = AppService::new(config, clock, random, sink.clone(), notifier(out));
    let ctl = svc.controller();

    sink.render(&ctl.status().await);
    if let Some(e) = ctl.start_scan().await.error {
        anyhow::bail!("scan did not start: {e}");
    }
    if let Some(e) = ctl.connect_scanner().await.error {
        anyhow::bail!("scanner did not connect: {e}");
    }

    match args.cancel_after_ms {
        Some(ms) => {
            tokio::select! {
                _ = ctl.wait_until_settled() => {}
                _ = tokio::time::sleep(Duration::from_millis(ms)) => {
                    log::info!("cancelling scan after {ms} ms");
                    ctl.cancel_scan().await;
                }
            }
        }
        None => ctl.wait_until_settled().await,
    }

    let done = ctl.status().await;
    if done.status != ScanStatus::Complete {
        return Ok(());
    }
    if let (Some(result), false) = (done.result.as_ref(), out.is_json()) {
        out.render(result)?;
    }
    ctl.new_scan().await;
    Ok(())
}

fn run_report(args: ReportArgs, out: &OutputWriter) -> anyhow::Result<()> {
    let mut form = ReportForm::new(notifier(out));

    let mut report = IncidentReport::new().with_food_category(args.food);
    if let Some(v) = args.symptoms {
        report = report.with_symptoms(v);
    }
    if let Some(v) = args.location {
        report = report.with_location(v);
    }
    if let Some(v) = args.date {
        report = report.with_consumption_date(v);
    }
    if let Some(v) = args.contact {
        report = report.with_contact(v);
    }
    if let Some(v) = args.description {
        report = report.with_description(v);
    }
    form.fill(report);

    if let Some(name) = args.photo {
        form.attach_photo(name);
    }
    for tag in &args.tags {
        if form.toggle_symptom_tag(tag).is_none() {
            log::warn!("ignoring unknown symptom tag: {tag}");
        }
    }

    out.render(&form.submit())
}

fn notifier(out: &OutputWriter) -> Arc<dyn Notifier> {
    // JSON output carries the acknowledgment itself; keep stdout parseable.
    if out.is_json() {
        Arc::new(LogNotifier)
    } else {
        Arc::new(ConsoleNotifier)
    }
}
