//! `domain/entity/<model>.go`

use super::{EmitContext, GoWriter, field_rows};

pub fn emit(ctx: &EmitContext<'_>) -> String {
    let mut w = GoWriter::file(&ctx.header(), "entity");
    w.blank();
    w.struct_type(ctx.model(), &field_rows(ctx.config.attributes()));
    w.finish()
}
