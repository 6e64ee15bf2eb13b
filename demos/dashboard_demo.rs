use chrono::Local;
use inventorist::catalog::{sample_products, summarize};
use inventorist::icons::{IconService, IconTheme};
use inventorist::theme::Theme;
use inventorist::ui::components::{DashboardHeader, MetricsSummary, SmartAlerts};

fn print_lines(lines: &[ratatui::text::Line]) {
    for line in lines {
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        println!("  {text}");
    }
}

fn main() {
    println!("📊 Dashboard widgets rendered as plain text\n");

    let theme = Theme::default();
    let icons = IconService::new(IconTheme::Emoji);
    let now = Local::now();

    let header = DashboardHeader::new("Dana", "Main Street Store", icons);
    println!("Header:");
    print_lines(&header.lines(now, &theme));

    let alerts = SmartAlerts::new(icons);

    println!("\nSmart alerts with the sample catalog:");
    let metrics = summarize(&sample_products(), 5);
    print_lines(&alerts.lines(&metrics, now, &theme));

    println!("\nSmart alerts when everything is stocked:");
    print_lines(&alerts.lines(&MetricsSummary::default(), now, &theme));
}
