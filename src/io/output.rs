use crate::catalog::{ComponentDefinition, Plan};
use crate::engine::ResultsData;
use crate::formatting::{format_currency, format_months, format_percentage, Styler};
use crate::formulas::FormulaTrace;
use crate::guardrails::{GuardrailReport, GuardrailResult, Severity};
use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Accepts the config file spelling (`json`, `markdown`, `terminal`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

/// Everything `roimap calculate` reports for one scenario.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip)]
    pub currency_symbol: String,
    pub hourly_rate: f64,
    #[serde(flatten)]
    pub results: ResultsData,
    pub guardrails: GuardrailReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub traces: Vec<FormulaTrace>,
}

/// Result of a visibility query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentListing {
    pub plan: Plan,
    pub esm: bool,
    pub freddy_copilot: bool,
    pub components: Vec<&'static ComponentDefinition>,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()>;
    fn write_components(&mut self, listing: &ComponentListing) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_components(&mut self, listing: &ComponentListing) -> anyhow::Result<()> {
        self.write_json(listing)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let title = report.title.as_deref().unwrap_or("ROI Analysis");
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let analysis = &report.results.analysis_results;
        let money = |v: f64| format_currency(v, &report.currency_symbol);

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| 3-Year ROI | {} |", format_percentage(analysis.roi))?;
        writeln!(
            self.writer,
            "| Payback Period | {} |",
            format_months(analysis.payback_period)
        )?;
        writeln!(
            self.writer,
            "| Total Benefits | {} |",
            money(analysis.total_benefits_3yr)
        )?;
        writeln!(self.writer, "| Total Costs | {} |", money(analysis.total_costs_3yr))?;
        writeln!(
            self.writer,
            "| Net Cash Flow | {} |",
            money(analysis.total_net_cash_flow_3yr)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_components_table(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        if report.results.component_results.is_empty() {
            return Ok(());
        }
        let money = |v: f64| format_currency(v, &report.currency_symbol);

        writeln!(self.writer, "## Benefits by Component")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Component | Category | Year 1 | Year 2 | Year 3 | Total |"
        )?;
        writeln!(
            self.writer,
            "|-----------|----------|--------|--------|--------|-------|"
        )?;
        for result in &report.results.component_results {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                result.component_name,
                result.category.label(),
                money(result.year1),
                money(result.year2),
                money(result.year3),
                money(result.total)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cash_flow(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let money = |v: f64| format_currency(v, &report.currency_symbol);

        writeln!(self.writer, "## Cash Flow")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Year | Benefits | Costs | Net |")?;
        writeln!(self.writer, "|------|----------|-------|-----|")?;
        for year in &report.results.yearly_data {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                year.year,
                money(year.benefits),
                money(year.costs),
                money(year.net_cash_flow)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_guardrails(&mut self, guardrails: &GuardrailReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Guardrails")?;
        writeln!(self.writer)?;
        let status = if guardrails.export_readiness.can_export {
            "Ready for export"
        } else {
            "Export blocked"
        };
        writeln!(self.writer, "**Status:** {status}")?;
        writeln!(self.writer)?;
        for error in guardrails.errors() {
            writeln!(self.writer, "- **Blocker:** {error}")?;
        }
        for warning in guardrails.warnings() {
            writeln!(self.writer, "- Warning: {warning}")?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_components_table(report)?;
        self.write_cash_flow(report)?;
        self.write_guardrails(&report.guardrails)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_components(&mut self, listing: &ComponentListing) -> anyhow::Result<()> {
        writeln!(self.writer, "# Components for {}", listing.plan)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| ID | Name | Category | Maturity |")?;
        writeln!(self.writer, "|----|------|----------|----------|")?;
        for def in &listing.components {
            writeln!(
                self.writer,
                "| `{}` | {} | {} | {} |",
                def.id,
                def.name,
                def.category.label(),
                if def.supports_maturity { "yes" } else { "no" }
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    styler: Styler,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, styler: Styler) -> Self {
        Self { writer, styler }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        // Wrap to the terminal only for interactive output.
        if self.styler.is_enabled() {
            table.set_content_arrangement(ContentArrangement::Dynamic);
        }
        table
    }

    fn write_summary(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let analysis = &report.results.analysis_results;
        let symbol = report.currency_symbol.as_str();
        let title = report.title.as_deref().unwrap_or("ROI Analysis");

        writeln!(self.writer, "{}", self.styler.header(title))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "  3-year ROI:      {}",
            self.styler
                .signed(analysis.roi, &format_percentage(analysis.roi))
        )?;
        writeln!(
            self.writer,
            "  Payback period:  {}",
            format_months(analysis.payback_period)
        )?;
        writeln!(
            self.writer,
            "  Total benefits:  {}",
            format_currency(analysis.total_benefits_3yr, symbol)
        )?;
        writeln!(
            self.writer,
            "  Total costs:     {}",
            format_currency(analysis.total_costs_3yr, symbol)
        )?;
        writeln!(
            self.writer,
            "  Net cash flow:   {}",
            self.styler.signed(
                analysis.total_net_cash_flow_3yr,
                &format_currency(analysis.total_net_cash_flow_3yr, symbol)
            )
        )?;
        writeln!(
            self.writer,
            "  {}",
            self.styler.dim(&format!(
                "Hourly rate {}/h, discount rate {}",
                format_currency(report.hourly_rate, symbol),
                format_percentage(report.results.discount_rate)
            ))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_components_table(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        let symbol = report.currency_symbol.as_str();
        if report.results.component_results.is_empty() {
            writeln!(self.writer, "  No components enabled.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let mut table = self.table();
        table.set_header(vec![
            "Component", "Category", "Annual", "Year 1", "Year 2", "Year 3", "Total",
        ]);
        for result in &report.results.component_results {
            table.add_row(vec![
                result.component_name.clone(),
                result.category.label().to_string(),
                format_currency(result.annual_benefit, symbol),
                format_currency(result.year1, symbol),
                format_currency(result.year2, symbol),
                format_currency(result.year3, symbol),
                format_currency(result.total, symbol),
            ]);
        }
        writeln!(self.writer, "{}", self.styler.bold("Benefits by component"))?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        let mut cash_flow = self.table();
        cash_flow.set_header(vec!["Year", "Benefits", "Costs", "Net cash flow"]);
        for year in &report.results.yearly_data {
            cash_flow.add_row(vec![
                year.year.to_string(),
                format_currency(year.benefits, symbol),
                format_currency(year.costs, symbol),
                format_currency(year.net_cash_flow, symbol),
            ]);
        }
        writeln!(self.writer, "{}", self.styler.bold("Cash flow"))?;
        writeln!(self.writer, "{cash_flow}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_traces(&mut self, traces: &[FormulaTrace]) -> anyhow::Result<()> {
        if traces.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", self.styler.bold("Formula traces"))?;
        for trace in traces {
            writeln!(self.writer, "  {} = {}", trace.component_id, trace.expression)?;
            let operands: Vec<String> = trace
                .operands
                .iter()
                .map(|o| format!("{}={}", o.name, o.value))
                .collect();
            writeln!(self.writer, "    {}", self.styler.dim(&operands.join(", ")))?;
            writeln!(self.writer, "    => {:.2}", trace.result)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_verdict(&mut self, label: &str, verdict: &GuardrailResult) -> anyhow::Result<()> {
        if let Some(message) = verdict.message() {
            let tag = match verdict.severity {
                Severity::Error => "[BLOCK]",
                Severity::Warning => "[WARN]",
                Severity::Info => "[INFO]",
            };
            writeln!(
                self.writer,
                "  {} {label}: {message}",
                self.styler.severity(verdict.severity, tag)
            )?;
        }
        Ok(())
    }

    fn write_guardrails(&mut self, guardrails: &GuardrailReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.styler.bold("Guardrails"))?;
        let readiness = &guardrails.export_readiness;
        if readiness.can_export {
            writeln!(self.writer, "  {}", self.styler.success("[OK] Ready for export"))?;
        } else {
            writeln!(
                self.writer,
                "  {}",
                self.styler.severity(Severity::Error, "[BLOCK] Export blocked")
            )?;
        }
        for blocker in &readiness.blockers {
            writeln!(self.writer, "    - {blocker}")?;
        }
        for warning in &readiness.warnings {
            writeln!(
                self.writer,
                "  {} {warning}",
                self.styler.severity(Severity::Warning, "[WARN]")
            )?;
        }

        self.write_verdict("ROI band", &guardrails.roi_band)?;
        self.write_verdict("Payback", &guardrails.payback)?;
        self.write_verdict("Realization", &guardrails.realization)?;
        for verdict in &guardrails.plausibility {
            self.write_verdict("Inputs", verdict)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CalculationReport) -> anyhow::Result<()> {
        self.write_summary(report)?;
        self.write_components_table(report)?;
        self.write_traces(&report.traces)?;
        self.write_guardrails(&report.guardrails)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_components(&mut self, listing: &ComponentListing) -> anyhow::Result<()> {
        let flags = [
            listing.esm.then_some("ESM"),
            listing.freddy_copilot.then_some("Freddy Copilot"),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
        let heading = if flags.is_empty() {
            format!("Components for {}", listing.plan)
        } else {
            format!("Components for {} + {}", listing.plan, flags.join(" + "))
        };
        writeln!(self.writer, "{}", self.styler.header(&heading))?;

        let mut table = self.table();
        table.set_header(vec!["ID", "Name", "Category", "Maturity", "Formula"]);
        for def in &listing.components {
            table.add_row(vec![
                def.id.to_string(),
                def.name.to_string(),
                def.category.label().to_string(),
                if def.supports_maturity { "yes" } else { "no" }.to_string(),
                def.id.formula_family().expression().to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(
            self.writer,
            "{}",
            self.styler
                .dim(&format!("{} components visible", listing.components.len()))
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    styler: Styler,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, styler)),
    }
}
