//! Service-like contracts: `domain/service.go` and `repository/<model>.go`.

use super::{EmitContext, GoWriter, Operation, field_rows};

/// Domain contract: the `Service` interface plus Create/Update params.
pub fn emit_domain(ctx: &EmitContext<'_>) -> String {
    let model = ctx.model();
    let mut w = GoWriter::file(&ctx.header(), "domain");
    w.imports(&[vec![ctx.package("domain/entity")]]);

    w.blank();
    w.line(format!(
        "// Service is the {} contract for {model}.",
        ctx.service()
    ));
    w.open("type Service interface {");
    for op in Operation::ALL {
        w.line(op.signature(model, ""));
    }
    w.close("}");

    let fields = field_rows(ctx.write_attributes());
    w.blank();
    w.line("// Remove the attributes that are not required for create or update params.");
    for op in [Operation::Create, Operation::Update] {
        if let Some(params) = op.params_type(model) {
            w.blank();
            w.struct_type(&params, &fields);
        }
    }

    w.finish()
}

/// Repository contract: the same five operations, results as entities.
pub fn emit_repository(ctx: &EmitContext<'_>) -> String {
    let model = ctx.model();
    let mut w = GoWriter::file(&ctx.header(), "repository");
    w.imports(&[vec![ctx.package("domain"), ctx.package("domain/entity")]]);

    w.blank();
    w.line(format!("// {model}Repo persists {model} entities."));
    w.open(format!("type {model}Repo interface {{"));
    for op in Operation::ALL {
        w.line(op.signature(model, "domain."));
    }
    w.close("}");

    w.finish()
}
