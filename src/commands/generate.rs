//! Generate the static site

use anyhow::Result;

use crate::generator::Generator;
use crate::Folio;

/// Generate the static site into the public directory
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    tracing::info!(
        "Generating site: {} categories, {} posts",
        folio.registry.category_count(),
        folio.registry.post_count()
    );

    let generator = Generator::new(folio)?;
    generator.generate()?;

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());
    Ok(())
}
