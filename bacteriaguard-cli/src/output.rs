use std::io::Write;

use serde::Serialize;

use bacteriaguard_core::config::AppConfig;
use bacteriaguard_core::content::{
    HeroContent, NoticeCard, common_symptoms, emergency_notice, report_benefits, report_notices,
};
use bacteriaguard_core::report::Acknowledgment;
use bacteriaguard_core::types::{FoodCategory, ScanResult};
use bacteriaguard_engine::education::EducationPanel;
use bacteriaguard_engine::traits::ScanStatusPayload;

const NAV: [&str; 3] = ["Scanner", "Education", "Reports"];

/// Human-readable rendering, used when `--json` is off.
pub trait Render {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()>;
}

/// Writes command payloads as text or pretty JSON.
pub struct OutputWriter {
    json: bool,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn render<T: Render + Serialize>(&self, payload: &T) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, payload)
    }

    pub fn write_to<T: Render + Serialize>(
        &self,
        w: &mut dyn Write,
        payload: &T,
    ) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *w, payload)?;
            writeln!(w)?;
        } else {
            payload.render_text(w)?;
        }
        Ok(())
    }
}

fn heading(w: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{title}")?;
    writeln!(w, "{}", "=".repeat(title.chars().count()))
}

impl Render for HeroContent {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "{}  |  {}", self.product, self.subtitle)?;
        writeln!(w, "{}", NAV.join("  "))?;
        writeln!(w)?;
        writeln!(w, "[{}]", self.badge)?;
        writeln!(w, "{} {}", self.headline, self.highlight)?;
        writeln!(w, "{}", self.pitch)?;
        writeln!(w)?;
        for stat in &self.stats {
            writeln!(w, "  {:>6}  {}", stat.value, stat.label)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TopicView {
    pub number: usize,
    pub title: &'static str,
    pub level: &'static str,
    pub read_time: &'static str,
    pub expanded: bool,
    pub text: &'static str,
    pub button: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TopicsView {
    pub topics: Vec<TopicView>,
}

impl TopicsView {
    pub fn from_panel(panel: &EducationPanel) -> anyhow::Result<Self> {
        let mut topics = Vec::with_capacity(panel.topics().len());
        for (i, topic) in panel.topics().iter().enumerate() {
            topics.push(TopicView {
                number: i + 1,
                title: topic.title,
                level: topic.level.label(),
                read_time: topic.read_time,
                expanded: panel.is_expanded(i)?,
                text: panel.visible_text(i)?,
                button: panel.button_label(i)?,
            });
        }
        Ok(Self { topics })
    }
}

impl Render for TopicsView {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        heading(w, "Food Safety Education")?;
        for t in &self.topics {
            writeln!(w)?;
            writeln!(w, "{}. {}  ({}, {})", t.number, t.title, t.level, t.read_time)?;
            for line in t.text.lines() {
                writeln!(w, "   {line}")?;
            }
            writeln!(w, "   [{}]", t.button)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ListView {
    pub title: &'static str,
    pub items: Vec<&'static str>,
}

impl Render for ListView {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        heading(w, self.title)?;
        for item in &self.items {
            writeln!(w, "  - {item}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CategoriesView {
    pub categories: Vec<CategoryView>,
}

impl CategoriesView {
    pub fn all() -> Self {
        Self {
            categories: FoodCategory::ALL
                .iter()
                .map(|c| CategoryView {
                    value: c.value(),
                    label: c.label(),
                })
                .collect(),
        }
    }
}

impl Render for CategoriesView {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        heading(w, "Type of Food/Drink")?;
        for c in &self.categories {
            writeln!(w, "  {:<12} {}", c.value, c.label)?;
        }
        Ok(())
    }
}

impl Render for Acknowledgment {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "Confirmation number: {}", self.confirmation_number)
    }
}

impl Render for ScanResult {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w)?;
        writeln!(
            w,
            "Result: {} ({}% confidence)",
            self.classification.as_str().to_uppercase(),
            self.confidence
        )?;
        writeln!(w, "{}", self.details)?;
        writeln!(w, "Recommendations:")?;
        for r in &self.recommendations {
            writeln!(w, "  - {r}")?;
        }
        Ok(())
    }
}

impl Render for AppConfig {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        writeln!(w, "log_level:    {}", self.log_level)?;
        match self.random_seed {
            Some(seed) => writeln!(w, "random_seed:  {seed}")?,
            None => writeln!(w, "random_seed:  (none)")?,
        }
        let d = &self.scan;
        writeln!(w, "connecting:   {} ms", d.connecting_ms)?;
        writeln!(w, "waiting-scan: {} ms", d.waiting_scan_ms)?;
        writeln!(w, "scanning:     {} ms", d.scanning_ms)?;
        writeln!(w, "sending-data: {} ms", d.sending_data_ms)?;
        writeln!(w, "processing:   {} ms", d.processing_ms)?;
        writeln!(w, "total:        {} ms", d.total().as_millis())
    }
}

impl Render for NoticeCard {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        heading(w, self.title)?;
        writeln!(w, "{}", self.body)?;
        if let Some(action) = self.action {
            writeln!(w, "[{action}]")?;
        }
        Ok(())
    }
}

/// The whole page, top to bottom.
#[derive(Debug, Serialize)]
pub struct SitePage {
    pub hero: &'static HeroContent,
    pub scanner: ScanStatusPayload,
    pub education: TopicsView,
    pub tips: ListView,
    pub emergency: &'static NoticeCard,
    pub categories: CategoriesView,
    pub symptoms: ListView,
    pub report_benefits: ListView,
    pub report_notices: [&'static NoticeCard; 2],
}

impl SitePage {
    pub fn new(
        hero: &'static HeroContent,
        scanner: ScanStatusPayload,
        education: TopicsView,
        tips: ListView,
    ) -> Self {
        Self {
            hero,
            scanner,
            education,
            tips,
            emergency: emergency_notice(),
            categories: CategoriesView::all(),
            symptoms: ListView {
                title: "Symptoms Experienced",
                items: common_symptoms().to_vec(),
            },
            report_benefits: ListView {
                title: "Your Report Matters",
                items: report_benefits().to_vec(),
            },
            report_notices: report_notices(),
        }
    }
}

impl Render for SitePage {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        self.hero.render_text(w)?;
        heading(w, "Scanner Device")?;
        writeln!(w, "{}", self.scanner.description)?;
        writeln!(w, "[Start Scan]")?;
        self.education.render_text(w)?;
        self.tips.render_text(w)?;
        self.emergency.render_text(w)?;
        heading(w, "Report Food Poisoning")?;
        self.categories.render_text(w)?;
        self.symptoms.render_text(w)?;
        self.report_benefits.render_text(w)?;
        for notice in &self.report_notices {
            notice.render_text(w)?;
        }
        Ok(())
    }
}
