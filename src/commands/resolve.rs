use anyhow::Result;
use cs_app::UseCases;

/// Row ids for `references`, in input order. Any miss fails the whole batch.
pub async fn run(use_cases: &UseCases, references: &[String]) -> Result<Vec<i64>> {
    Ok(use_cases.resolve_reference_ids().execute(references).await?)
}
