//! Enumerated attributes of the clusters management model.

ocm_model_core::string_enum! {
    /// Billing model for cluster resources.
    pub struct BillingModel {
        /// Standard. This is the default billing model.
        STANDARD = "standard",
        /// Marketplace. Bills through Red Hat Marketplace.
        MARKETPLACE = "marketplace",
        /// AWS Marketplace.
        MARKETPLACE_AWS = "marketplace-aws",
        /// Azure Marketplace.
        MARKETPLACE_AZURE = "marketplace-azure",
        /// Google Cloud Platform Marketplace.
        MARKETPLACE_GCP = "marketplace-gcp",
        /// Red Hat Marketplace.
        MARKETPLACE_RHM = "marketplace-rhm",
    }
}

ocm_model_core::string_enum! {
    /// Overall state of a cluster.
    pub struct ClusterState {
        /// Error during installation.
        ERROR = "error",
        /// The cluster is hibernating.
        HIBERNATING = "hibernating",
        /// The cluster is still being installed.
        INSTALLING = "installing",
        /// The cluster is pending resources before being provisioned.
        PENDING = "pending",
        /// The cluster is moving to hibernating.
        POWERING_DOWN = "powering_down",
        /// The cluster is ready to use.
        READY = "ready",
        /// The cluster is resuming from hibernation.
        RESUMING = "resuming",
        /// The cluster is being uninstalled.
        UNINSTALLING = "uninstalling",
        /// The state of the cluster is unknown.
        UNKNOWN = "unknown",
        /// The cluster is validating user input.
        VALIDATING = "validating",
        /// The cluster is waiting for user action.
        WAITING = "waiting",
    }
}

ocm_model_core::string_enum! {
    /// Health state of a cluster, as reported by its monitoring.
    pub struct ClusterHealthState {
        HEALTHY = "healthy",
        UNHEALTHY = "unhealthy",
        UNKNOWN = "unknown",
    }
}

ocm_model_core::string_enum! {
    /// Configuration mode of a cluster.
    pub struct ClusterConfigurationMode {
        /// Full configuration (default).
        FULL = "full",
        /// Only read configuration operations are supported.
        READ_ONLY = "read_only",
    }
}

ocm_model_core::string_enum! {
    /// Cluster components listening method.
    pub struct ListeningMethod {
        /// Listen on external (public) network.
        EXTERNAL = "external",
        /// Listen on internal (private) network.
        INTERNAL = "internal",
    }
}

ocm_model_core::string_enum! {
    /// Type of load balancer for AWS cloud provider parameters.
    pub struct LoadBalancerFlavor {
        CLASSIC = "classic",
        NLB = "nlb",
    }
}

ocm_model_core::string_enum! {
    /// Representation of the possible values for an external authentication client
    /// type.
    pub struct ExternalAuthClientType {
        CONFIDENTIAL = "confidential",
        PUBLIC = "public",
    }
}

ocm_model_core::string_enum! {
    /// Type of identity provider.
    pub struct IdentityProviderType {
        GITHUB = "GithubIdentityProvider",
        GITLAB = "GitlabIdentityProvider",
        GOOGLE = "GoogleIdentityProvider",
        HTPASSWD = "HTPasswdIdentityProvider",
        LDAP = "LDAPIdentityProvider",
        OPENID = "OpenIDIdentityProvider",
    }
}

ocm_model_core::string_enum! {
    /// Controls how mappings are established between provider identities and user
    /// objects.
    pub struct IdentityProviderMappingMethod {
        /// Provisions a user with the identity's preferred user name, or adds the
        /// identity to an existing user with that name.
        ADD = "add",
        /// Provisions a user with the identity's preferred user name. Fails if a
        /// user with that name is already mapped to another identity.
        CLAIM = "claim",
        /// Provisions a user with the identity's preferred user name, or generates
        /// a unique user name if taken.
        GENERATE = "generate",
        /// Looks up existing users already mapped to an identity but does not
        /// automatically provision users or identities.
        LOOKUP = "lookup",
    }
}

ocm_model_core::string_enum! {
    /// Machine type category.
    pub struct MachineTypeCategory {
        ACCELERATED_COMPUTING = "accelerated_computing",
        COMPUTE_OPTIMIZED = "compute_optimized",
        GENERAL_PURPOSE = "general_purpose",
        MEMORY_OPTIMIZED = "memory_optimized",
    }
}

ocm_model_core::string_enum! {
    /// Machine type size.
    pub struct MachineTypeSize {
        LARGE = "large",
        MEDIUM = "medium",
        SMALL = "small",
    }
}
