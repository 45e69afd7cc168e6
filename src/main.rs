//! Domain Lens - SEO domain scoring and comparison
//!
//! A simple CLI that scores domain names for SEO friendliness, explains the
//! result, and picks the best candidate out of several.

use domain_lens::{
    AnalysisResult, DomainAnalyzer, DomainComparison, Insight, RegistrarPricingClient, Result,
    SeededPricingProvider,
};
use std::env;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = domain_lens::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_help();
        return Ok(());
    }

    let domains: Vec<String> = args[1..].iter().map(|s| s.to_string()).collect();

    if let Err(e) = run_domain_lens(&domains).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Main domain lens workflow
async fn run_domain_lens(domains: &[String]) -> Result<()> {
    println!("🔍 Domain Lens - SEO domain scoring");
    println!("═══════════════════════════════════");
    println!();

    let analyzer = DomainAnalyzer::new();
    setup_pricing_providers(&analyzer);

    if domains.len() == 1 {
        let result = analyzer.analyze(&domains[0]).await?;
        display_analysis(&result);
    } else {
        let comparison = analyzer.compare(domains).await?;
        for result in &comparison.domains {
            display_analysis(result);
        }
        display_comparison(&comparison);
    }

    let metrics = analyzer.get_metrics_snapshot();
    println!("📈 Summary:");
    println!("   📊 Domains analyzed: {}", metrics.domains_analyzed);
    if metrics.enrichment_failures > 0 {
        println!("   ⚠️  Pricing lookups failed: {}", metrics.enrichment_failures);
    }
    println!("   ⏱️  Average analysis time: {:.1}ms", metrics.avg_analysis_time_ms());

    Ok(())
}

/// Register pricing providers
///
/// `DOMAIN_LENS_SEED` switches to the deterministic synthetic provider
/// (useful offline); otherwise live RDAP lookups are the default and the
/// synthetic provider serves as fallback.
fn setup_pricing_providers(analyzer: &DomainAnalyzer) {
    if let Ok(seed) = env::var("DOMAIN_LENS_SEED") {
        let seed = seed.parse::<u64>().unwrap_or(0);
        analyzer.add_provider(Arc::new(SeededPricingProvider::with_seed(seed)));
        analyzer.set_default_provider("synthetic");
        println!("✅ Synthetic pricing provider configured (seed {})", seed);
    } else {
        analyzer.add_provider(Arc::new(RegistrarPricingClient::new()));
        analyzer.add_provider(Arc::new(SeededPricingProvider::new()));
        analyzer.set_default_provider("registrar");
        println!("✅ Registrar pricing provider configured");
    }
    println!();
}

/// Display one domain scorecard
fn display_analysis(result: &AnalysisResult) {
    println!("🌐 {}", result.domain);
    println!("───────────────────────");
    println!("   🏆 Overall score: {}/10", result.metrics.overall_score);
    println!("   📏 Length: {:.1}", result.metrics.length);
    println!("   🧠 Memorability: {:.1}", result.metrics.memorability);
    println!("   ✨ Brandability: {:.1}", result.metrics.brandability);
    println!("   🔑 Keyword placement: {:.1}", result.metrics.keyword_placement);
    println!("   🌍 Extension: {:.1}", result.metrics.domain_extension);

    if let Some(pricing) = &result.pricing {
        if pricing.available {
            match (&pricing.price, &pricing.currency) {
                (Some(price), Some(currency)) => {
                    println!("   💰 Available for {:.2} {}", price, currency)
                }
                _ => println!("   💰 Available"),
            }
        } else {
            match &pricing.registrar {
                Some(registrar) => println!("   ❌ Taken ({})", registrar),
                None => println!("   ❌ Taken"),
            }
        }
    }

    print_insight_list("💪 Strengths", &result.strengths);
    print_insight_list("⚠️  Weaknesses", &result.weaknesses);
    print_insight_list("💡 Recommendations", &result.recommendations);
    println!();
}

fn print_insight_list(title: &str, insights: &[Insight]) {
    if insights.is_empty() {
        return;
    }
    println!("   {}:", title);
    for insight in insights {
        println!("      • {}", insight.text);
    }
}

/// Display the comparison verdict
fn display_comparison(comparison: &DomainComparison) {
    println!("🥇 Best choice: {}", comparison.best_choice);
    println!("═══════════════════════════════════");
    for result in &comparison.domains {
        let marker = if result.domain == comparison.best_choice {
            "🥇"
        } else {
            "  "
        };
        println!(
            "{} {:<30} {}/10",
            marker, result.domain, result.metrics.overall_score
        );
    }
    println!();
}

/// Print help information
fn print_help() {
    println!("🔍 Domain Lens - SEO domain scoring and comparison");
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    domain-lens <DOMAIN> [DOMAIN...]");
    println!();
    println!("EXAMPLES:");
    println!("    domain-lens example.com                # Score one domain");
    println!("    domain-lens shop.io myshop.com         # Compare candidates");
    println!("    domain-lens https://www.myseo-app.io/  # URLs are cleaned first");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    DOMAIN_LENS_SEED   Use deterministic synthetic pricing with this seed");
    println!();
    println!("FEATURES:");
    println!("    • Five-factor SEO scoring (length, keywords, memorability,");
    println!("      brandability, extension) with a weighted overall score");
    println!("    • Actionable strengths, weaknesses and recommendations");
    println!("    • Live RDAP availability + list-price enrichment");
    println!("    • Side-by-side comparison with a best-choice pick");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
