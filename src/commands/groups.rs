use anyhow::Result;
use cs_app::UseCases;
use cs_core::GroupInfo;

pub async fn run(use_cases: &UseCases) -> Result<Vec<GroupInfo>> {
    Ok(use_cases.list_pickable_groups().execute().await?)
}
