use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use tracing::info;

pub(crate) const RECEIVED_LABEL: &str = "Evento recebido do S3:";
pub(crate) const PROCESSED_BODY: &str = "Arquivo processado com sucesso!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    fn processed() -> Self {
        Response {
            status_code: 200,
            body: PROCESSED_BODY.to_string(),
        }
    }
}

pub(crate) async fn function_handler<T>(event: LambdaEvent<T>) -> Result<Response, Error>
where
    T: Serialize,
{
    info!("{}", RECEIVED_LABEL);
    let payload = serde_json::to_string(&event.payload)?;
    info!("{}", payload);

    Ok(Response::processed())
}
