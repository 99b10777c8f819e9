//! Artifact emitters.
//!
//! One pure function per architectural layer, each turning an
//! [`EmitContext`] into the text of one Go file. None of them perform I/O.
//!
//! ```text
//! <service>/
//! ├── domain/entity/<model>.go              entity
//! ├── domain/service.go                     domain contract + params
//! ├── service/service.go                    service implementation
//! ├── endpoint/{decoder,encoder,view,endpoint}.go
//! ├── repository/<model>.go                 repository contract
//! ├── repository/impl/postgresql/connection.go
//! ├── repository/impl/postgresql/<model>.go repository stub
//! └── main.go                               entry point
//! ```

mod contract;
mod entity;
mod entrypoint;
pub mod operations;
mod persistence;
mod service;
mod transport;
pub mod writer;

use tracing::{debug, instrument};

use crate::domain::{
    entities::{Artifact, ArtifactKind, ArtifactSet, Attribute, ServiceConfig},
    naming::{DerivedNames, lower_initial},
    value_objects::GenerationOptions,
};

pub use operations::Operation;
pub use writer::{GoWriter, Import};

/// Everything an emitter may read. Borrowed, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
    pub config: &'a ServiceConfig,
    pub names: &'a DerivedNames,
    pub options: &'a GenerationOptions,
}

impl<'a> EmitContext<'a> {
    pub fn new(
        config: &'a ServiceConfig,
        names: &'a DerivedNames,
        options: &'a GenerationOptions,
    ) -> Self {
        Self {
            config,
            names,
            options,
        }
    }

    pub fn model(&self) -> &'a str {
        self.config.model_name()
    }

    pub fn service(&self) -> &'a str {
        self.config.service_name()
    }

    /// Import path of a package inside the generated module.
    pub fn package(&self, sub: &str) -> Import {
        Import::new(format!("{}/{sub}", self.service()))
    }

    /// Header comment carried by every generated file.
    pub fn header(&self) -> String {
        format!(
            "Scaffolded by kitgen for {} (model {}). Regenerating overwrites this file.",
            self.service(),
            self.model()
        )
    }

    /// Attributes of the Create/Update shapes under the identifier policy.
    pub fn write_attributes(&self) -> Vec<&'a Attribute> {
        self.options
            .write_attributes(self.config.attributes())
            .collect()
    }
}

/// A pure emitter: one file's text from the shared context.
pub type Emitter = fn(&EmitContext<'_>) -> String;

/// Every layer, in write order.
pub const EMITTERS: [(ArtifactKind, Emitter); 11] = [
    (ArtifactKind::Entity, entity::emit),
    (ArtifactKind::DomainContract, contract::emit_domain),
    (ArtifactKind::ServiceImpl, service::emit),
    (ArtifactKind::Decoder, transport::emit_decoder),
    (ArtifactKind::Encoder, transport::emit_encoder),
    (ArtifactKind::View, transport::emit_view),
    (ArtifactKind::Endpoint, transport::emit_endpoint),
    (ArtifactKind::RepoContract, contract::emit_repository),
    (ArtifactKind::RepoConnection, persistence::emit_connection),
    (ArtifactKind::RepoImpl, persistence::emit_repository_stub),
    (ArtifactKind::Entrypoint, entrypoint::emit),
];

/// Target path of an artifact, relative to the service root.
pub fn path_for(kind: ArtifactKind, names: &DerivedNames) -> String {
    let model = &names.snake_model;
    match kind {
        ArtifactKind::Entity => format!("domain/entity/{model}.go"),
        ArtifactKind::DomainContract => "domain/service.go".into(),
        ArtifactKind::ServiceImpl => "service/service.go".into(),
        ArtifactKind::Decoder => "endpoint/decoder.go".into(),
        ArtifactKind::Encoder => "endpoint/encoder.go".into(),
        ArtifactKind::View => "endpoint/view.go".into(),
        ArtifactKind::Endpoint => "endpoint/endpoint.go".into(),
        ArtifactKind::RepoContract => format!("repository/{model}.go"),
        ArtifactKind::RepoConnection => "repository/impl/postgresql/connection.go".into(),
        ArtifactKind::RepoImpl => format!("repository/impl/postgresql/{model}.go"),
        ArtifactKind::Entrypoint => "main.go".into(),
    }
}

/// Run every emitter and collect the artifacts in write order.
#[instrument(skip_all, fields(service = %ctx.service(), model = %ctx.model()))]
pub fn emit_all(ctx: &EmitContext<'_>) -> ArtifactSet {
    let mut set = ArtifactSet::new();
    for (kind, emitter) in EMITTERS {
        let artifact = Artifact::new(kind, path_for(kind, ctx.names), emitter(ctx));
        debug!(kind = %kind, path = %artifact.path, bytes = artifact.size(), "emitted");
        set.push(artifact);
    }
    set
}

/// `Name Type` rows.
fn field_rows<'a>(attributes: impl IntoIterator<Item = &'a Attribute>) -> Vec<Vec<String>> {
    attributes
        .into_iter()
        .map(|a| vec![a.name().to_string(), a.type_token().to_string()])
        .collect()
}

/// `Name Type `json:"name"`` rows.
fn tagged_rows<'a>(attributes: impl IntoIterator<Item = &'a Attribute>) -> Vec<Vec<String>> {
    attributes
        .into_iter()
        .map(|a| {
            vec![
                a.name().to_string(),
                a.type_token().to_string(),
                json_tag(a.name()),
            ]
        })
        .collect()
}

fn json_tag(field: &str) -> String {
    format!("`json:\"{}\"`", lower_initial(field))
}
