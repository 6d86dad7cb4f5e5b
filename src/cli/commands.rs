use crate::error::TemplateResult;
use crate::excel::TemplateBuilder;
use crate::types::TemplateConfig;
use colored::Colorize;

/// Build the template and write it to `config.output_path`.
/// Prints a single confirmation line on success.
pub fn generate(config: &TemplateConfig) -> TemplateResult<()> {
    let mut builder = TemplateBuilder::harkness(config)?;
    builder.save(&config.output_path)?;

    println!(
        "{} {}",
        "Template saved to:".bold().green(),
        config.output_path.display()
    );

    Ok(())
}
