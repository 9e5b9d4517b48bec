use gsp_tools::{EchoRequest, GspApiError, PushProvisioning};
use mockall::mock;
use serde_json::Value;

mock! {
    pub Gsp {}
    impl PushProvisioning for Gsp {
        async fn echo(&self, request: EchoRequest) -> Result<String, GspApiError>;
        async fn push_provisioning_notification(&self, notification: Value) -> Result<String, GspApiError>;
    }
}
