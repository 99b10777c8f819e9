// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for kitgen.
//!
//! Pure logic only: parsing a service description, deriving identifiers and
//! emitting the text of every generated file. Reading the description and
//! writing the tree happen behind ports in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: emitters return strings, the parser takes `&str`
//! - **No process-wide state**: everything flows through [`EmitContext`]
//! - **Immutable inputs**: [`ServiceConfig`] is built once and only borrowed
//!
// Public API
pub mod emit;
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

mod validation;

pub use emit::{EmitContext, Operation, emit_all};
pub use entities::{
    Artifact, ArtifactKind, ArtifactPath, ArtifactSet, Attribute, ServiceConfig,
};
pub use error::{ConfigError, ErrorCategory, LayoutError};
pub use naming::DerivedNames;
pub use validation::DomainValidator;
pub use value_objects::{GenerationOptions, IdentifierPolicy};

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: &str = "\
ServiceName = order-service
ModelName = Order
Attributes = {
  Id = string
  Total = float64
}
";

    fn artifacts(source: &str, options: &GenerationOptions) -> ArtifactSet {
        let config = ServiceConfig::parse(source).unwrap();
        let names = DerivedNames::derive(&config);
        emit_all(&EmitContext::new(&config, &names, options))
    }

    // ========================================================================
    // End-to-end over the pure pipeline
    // ========================================================================

    #[test]
    fn order_example_produces_a_consistent_tree() {
        let set = artifacts(ORDER, &GenerationOptions::default());
        DomainValidator::validate_artifacts(&set).unwrap();
        assert_eq!(set.len(), 11);

        let entity = set.get(ArtifactKind::Entity).unwrap();
        assert_eq!(entity.path.to_string(), "domain/entity/order.go");
        assert!(
            entity
                .content
                .contains("type Order struct {\n\tId    string\n\tTotal float64\n}")
        );

        let contract = &set.get(ArtifactKind::DomainContract).unwrap().content;
        for method in [
            "ListOrders",
            "GetOrder",
            "CreateOrder",
            "UpdateOrder",
            "DeleteOrder",
        ] {
            assert!(contract.contains(&format!("\t{method}(")), "missing {method}");
        }
    }

    #[test]
    fn contracts_and_implementations_agree_on_the_operations() {
        let set = artifacts(ORDER, &GenerationOptions::default());
        let signatures: Vec<String> = Operation::ALL
            .iter()
            .map(|op| op.signature("Order", "domain."))
            .collect();

        let repo = &set.get(ArtifactKind::RepoContract).unwrap().content;
        let service = &set.get(ArtifactKind::ServiceImpl).unwrap().content;
        let stub = &set.get(ArtifactKind::RepoImpl).unwrap().content;
        for sig in &signatures {
            assert!(repo.contains(&format!("\t{sig}\n")));
            assert!(service.contains(&format!("func (s ServiceImpl) {sig} {{")));
            assert!(stub.contains(&format!("func (r *PostgresOrderRepo) {sig} {{")));
        }
    }

    #[test]
    fn attributes_keep_declaration_order_everywhere() {
        let source = "\
ServiceName = ledger
ModelName = Entry
Attributes = {
  Zeta = string
  Alpha = int
  Mid = bool
}
";
        let set = artifacts(source, &GenerationOptions::default());
        for kind in [
            ArtifactKind::Entity,
            ArtifactKind::DomainContract,
            ArtifactKind::View,
        ] {
            let content = &set.get(kind).unwrap().content;
            let zeta = content.find("Zeta").unwrap();
            let alpha = content.find("Alpha").unwrap();
            let mid = content.find("Mid").unwrap();
            assert!(zeta < alpha && alpha < mid, "{kind} reorders attributes");
        }
    }

    #[test]
    fn exclude_policy_touches_only_write_shapes() {
        let options = GenerationOptions::default().with_identifier_policy(IdentifierPolicy::Exclude);
        let set = artifacts(ORDER, &options);

        let entity = &set.get(ArtifactKind::Entity).unwrap().content;
        let view = &set.get(ArtifactKind::View).unwrap().content;
        let contract = &set.get(ArtifactKind::DomainContract).unwrap().content;
        assert!(entity.contains("\tId    string\n"));
        assert!(view.contains("\tId    string  `json:\"id\"`\n"));
        assert!(contract.contains("type CreateOrderParams struct {\n\tTotal float64\n}"));
    }

    #[test]
    fn bad_line_is_reported_with_its_number() {
        let source = "ServiceName = s\nModelName = M\nAttributes = {\nBadLine\n}\n";
        let err = ServiceConfig::parse(source).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MalformedLine {
                line_number: 4,
                line: "BadLine".into()
            }
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
