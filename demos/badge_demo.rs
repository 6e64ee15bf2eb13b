use inventorist::theme::Theme;
use inventorist::ui::components::badge::{create_stock_badge, Badge, BadgeSize, BadgeVariant};

fn main() {
    println!("🎨 Badge Demo - semantic badges for the admin panel\n");

    let theme = Theme::fallback();

    println!("Variants:");
    for name in ["default", "success", "warning", "danger", "info"] {
        let badge = Badge::new(name.to_uppercase())
            .variant(BadgeVariant::from_name(name))
            .to_span(theme);
        println!("  {name:<8} {}", badge.content);
    }

    println!("\nSizes:");
    for name in ["sm", "md", "lg"] {
        let badge = Badge::new("STOCK")
            .size(BadgeSize::from_name(name))
            .to_span(theme);
        println!("  {name:<4} [{}]", badge.content);
    }

    // Unknown keys fall back instead of rendering unstyled
    let fallback = Badge::new("TYPO")
        .variant(BadgeVariant::from_name("primry"))
        .size(BadgeSize::from_name("huge"))
        .to_span(theme);
    println!("\nFallback for unknown variant/size: [{}]", fallback.content);

    println!("\nStock badges:");
    for on_hand in [0, 3, 24] {
        let badge = create_stock_badge(on_hand, 5, theme);
        println!("  on_hand={on_hand:<3} {}", badge.content);
    }
}
