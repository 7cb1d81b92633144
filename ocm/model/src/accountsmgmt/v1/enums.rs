ocm_model_core::string_enum! {
    /// Billing model of a reserved resource.
    pub struct BillingModel {
        STANDARD = "standard",
        MARKETPLACE = "marketplace",
        MARKETPLACE_AWS = "marketplace-aws",
        MARKETPLACE_AZURE = "marketplace-azure",
        MARKETPLACE_GCP = "marketplace-gcp",
        MARKETPLACE_RHM = "marketplace-rhm",
    }
}
