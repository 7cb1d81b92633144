//! The document types the tool can decode.

use ocm_api_model::accountsmgmt::v1 as accounts;
use ocm_api_model::clustersmgmt::v1 as clusters;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Operation run against the concrete model type behind a [`DocumentKind`].
pub trait DocumentVisitor {
    type Output;

    fn visit<T>(self, kind: DocumentKind) -> Self::Output
    where
        T: Serialize + DeserializeOwned;
}

/// Model types accepted by `--kind`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentKind {
    Cluster,
    CloudProvider,
    CloudRegion,
    CloudVpc,
    ExternalAuth,
    HtpasswdUser,
    IdentityProvider,
    Ingress,
    MachinePool,
    MachineType,
    NodePool,
    Product,
    Subscription,
    Version,
    Organization,
    QuotaCost,
    ReservedResource,
}

impl DocumentKind {
    /// The API service and version declaring the type.
    pub fn service(self) -> &'static str {
        match self {
            Self::Organization | Self::QuotaCost | Self::ReservedResource => "accounts_mgmt/v1",
            _ => "clusters_mgmt/v1",
        }
    }

    /// Runs `visitor` with the model type of this kind.
    pub fn accept<V: DocumentVisitor>(self, visitor: V) -> V::Output {
        match self {
            Self::Cluster => visitor.visit::<clusters::Cluster>(self),
            Self::CloudProvider => visitor.visit::<clusters::CloudProvider>(self),
            Self::CloudRegion => visitor.visit::<clusters::CloudRegion>(self),
            Self::CloudVpc => visitor.visit::<clusters::CloudVpc>(self),
            Self::ExternalAuth => visitor.visit::<clusters::ExternalAuth>(self),
            Self::HtpasswdUser => visitor.visit::<clusters::HtpasswdUser>(self),
            Self::IdentityProvider => visitor.visit::<clusters::IdentityProvider>(self),
            Self::Ingress => visitor.visit::<clusters::Ingress>(self),
            Self::MachinePool => visitor.visit::<clusters::MachinePool>(self),
            Self::MachineType => visitor.visit::<clusters::MachineType>(self),
            Self::NodePool => visitor.visit::<clusters::NodePool>(self),
            Self::Product => visitor.visit::<clusters::Product>(self),
            Self::Subscription => visitor.visit::<clusters::Subscription>(self),
            Self::Version => visitor.visit::<clusters::Version>(self),
            Self::Organization => visitor.visit::<accounts::Organization>(self),
            Self::QuotaCost => visitor.visit::<accounts::QuotaCost>(self),
            Self::ReservedResource => visitor.visit::<accounts::ReservedResource>(self),
        }
    }
}
