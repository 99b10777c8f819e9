//! Placeholder persistence layer under `repository/impl/postgresql/`.
//!
//! Nothing here talks to a database. The stub satisfies the repository
//! contract so the generated module builds, and every method fails with
//! `ErrNotImplemented` until someone writes the queries.

use super::{EmitContext, GoWriter, Import, Operation};

pub fn emit_connection(ctx: &EmitContext<'_>) -> String {
    let mut w = GoWriter::file(&ctx.header(), "postgresql");
    w.imports(&[vec![
        Import::new("upper.io/db.v3/lib/sqlbuilder"),
        Import::new("upper.io/db.v3/postgresql"),
    ]]);

    w.blank();
    w.line("// openConn opens a session with empty settings. Fill them in before use.");
    w.open("func openConn() sqlbuilder.Database {");
    w.open("settings := postgresql.ConnectionURL{");
    w.aligned(&[
        vec!["User:".into(), "\"\",".into()],
        vec!["Password:".into(), "\"\",".into()],
        vec!["Host:".into(), "\"\",".into()],
        vec!["Socket:".into(), "\"\",".into()],
        vec!["Database:".into(), "\"\",".into()],
        vec!["Options:".into(), "nil,".into()],
    ]);
    w.close("}");
    w.blank();
    w.line("conn, err := postgresql.Open(settings)");
    w.open("if err != nil {");
    w.line("panic(\"postgresql: cannot open connection: \" + err.Error())");
    w.close("}");
    w.blank();
    w.line("return conn");
    w.close("}");

    for name in ["getReadConn", "getWriteConn"] {
        w.blank();
        w.open(format!("func {name}() sqlbuilder.Database {{"));
        w.line("return openConn()");
        w.close("}");
    }

    w.finish()
}

pub fn emit_repository_stub(ctx: &EmitContext<'_>) -> String {
    let model = ctx.model();
    let stub = format!("Postgres{model}Repo");

    let mut w = GoWriter::file(&ctx.header(), "postgresql");
    w.imports(&[
        vec![Import::new("errors")],
        vec![ctx.package("domain"), ctx.package("domain/entity")],
    ]);

    w.blank();
    w.line("// NOT GENERATED: persistence logic is intentionally left unimplemented.");
    w.line(format!(
        "// Every {stub} method returns ErrNotImplemented until real queries replace it."
    ));
    w.line(format!(
        "var ErrNotImplemented = errors.New(\"postgresql: {model} repository is not implemented\")"
    ));

    w.blank();
    w.line(format!("type {stub} struct{{}}"));

    w.blank();
    w.open(format!("func MakePostgres{model}Repo() {stub} {{"));
    w.line(format!("return {stub}{{}}"));
    w.close("}");

    for op in Operation::ALL {
        w.blank();
        w.open(format!(
            "func (r *{stub}) {} {{",
            op.signature(model, "domain.")
        ));
        match op.zero_result(model) {
            Some(zero) => w.line(format!("return {zero}, ErrNotImplemented")),
            None => w.line("return ErrNotImplemented"),
        };
        w.close("}");
    }

    w.finish()
}
