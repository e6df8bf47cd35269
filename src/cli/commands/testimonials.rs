//! Testimonial carousel command.

use console::style;

use crate::carousel::Carousel;
use crate::config::Settings;
use crate::models::Testimonial;

use super::super::helpers::load_catalog;
use super::super::icons::{dim_arrow, warn};

/// Show the current testimonial, then rotate `cycles` times on the carousel interval.
pub async fn cmd_testimonials(settings: &Settings, cycles: usize) -> anyhow::Result<()> {
    let catalog = load_catalog(settings)?;
    let testimonials = &catalog.testimonials;

    let mut carousel = Carousel::new(testimonials.len())
        .with_reduced_motion(settings.reduced_motion)
        .with_interval(settings.carousel_interval());

    let Some(index) = carousel.current() else {
        println!("{} No testimonials", warn());
        return Ok(());
    };
    print_testimonial(&testimonials[index], index, testimonials.len());

    if cycles == 0 {
        return Ok(());
    }
    if !carousel.should_auto_rotate() {
        println!(
            "{} Auto-rotation is off (reduced motion, or fewer than two testimonials)",
            dim_arrow()
        );
        return Ok(());
    }

    let mut ticker = tokio::time::interval(carousel.interval());
    // First tick completes immediately
    ticker.tick().await;
    for _ in 0..cycles {
        ticker.tick().await;
        if carousel.tick() {
            if let Some(index) = carousel.current() {
                print_testimonial(&testimonials[index], index, testimonials.len());
            }
        }
    }
    Ok(())
}

fn print_testimonial(testimonial: &Testimonial, index: usize, total: usize) {
    println!(
        "\n{} {}",
        style(format!("[{}/{}]", index + 1, total)).dim(),
        style(format!("\u{201c}{}\u{201d}", testimonial.content)).italic()
    );
    println!(
        "  {} {}, {}",
        dim_arrow(),
        style(&testimonial.author).bold(),
        testimonial.attribution()
    );
}
