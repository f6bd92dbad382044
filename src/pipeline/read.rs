use std::path::Path;

use crate::error::ExtractError;

pub async fn read_chart_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    String::from_utf8(bytes).map_err(|source| ExtractError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
