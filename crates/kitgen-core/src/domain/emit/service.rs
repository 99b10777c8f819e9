//! `service/service.go`: pure delegation to the repository.

use super::{EmitContext, GoWriter, Operation};

pub fn emit(ctx: &EmitContext<'_>) -> String {
    let model = ctx.model();
    let repo = format!("{}Repo", ctx.names.lower_initial_model);

    let mut w = GoWriter::file(&ctx.header(), "service");
    w.imports(&[vec![
        ctx.package("domain"),
        ctx.package("domain/entity"),
        ctx.package("repository"),
        ctx.package("repository/impl/postgresql"),
    ]]);

    w.blank();
    w.line("// ServiceImpl implements domain.Service by forwarding to the repository.");
    w.open("type ServiceImpl struct {");
    w.line(format!("{repo} repository.{model}Repo"));
    w.close("}");

    w.blank();
    w.line("var _ domain.Service = ServiceImpl{}");

    w.blank();
    w.open("func MakeServiceImpl() ServiceImpl {");
    w.line(format!("{repo} := postgresql.MakePostgres{model}Repo()"));
    w.line(format!("return ServiceImpl{{{repo}: &{repo}}}"));
    w.close("}");

    for op in Operation::ALL {
        w.blank();
        w.open(format!(
            "func (s ServiceImpl) {} {{",
            op.signature(model, "domain.")
        ));
        w.line(format!("return s.{repo}.{}", op.call(model)));
        w.close("}");
    }

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{emit::fixtures::render, entities::ServiceConfig};

    #[test]
    fn holds_one_repository_and_forwards_every_operation() {
        let config = ServiceConfig::new("user-profile", "UserAccount", vec![]).unwrap();
        let out = render(&config, emit);

        assert!(out.contains("type ServiceImpl struct {\n\tuserAccountRepo repository.UserAccountRepo\n}"));
        assert!(out.contains("userAccountRepo := postgresql.MakePostgresUserAccountRepo()"));
        assert!(out.contains("return ServiceImpl{userAccountRepo: &userAccountRepo}"));
        assert!(out.contains(
            "func (s ServiceImpl) ListUserAccounts() ([]entity.UserAccount, error) {\n\
             \treturn s.userAccountRepo.ListUserAccounts()\n}"
        ));
        assert!(out.contains(
            "func (s ServiceImpl) UpdateUserAccount(params domain.UpdateUserAccountParams) (entity.UserAccount, error) {\n\
             \treturn s.userAccountRepo.UpdateUserAccount(params)\n}"
        ));
        assert!(out.contains(
            "func (s ServiceImpl) DeleteUserAccount(id string) error {\n\
             \treturn s.userAccountRepo.DeleteUserAccount(id)\n}"
        ));
        assert_eq!(out.matches("func (s ServiceImpl)").count(), 5);
    }

    #[test]
    fn imports_resolve_inside_the_service_module() {
        let config = ServiceConfig::new("user-profile", "UserAccount", vec![]).unwrap();
        let out = render(&config, emit);
        for pkg in [
            "domain",
            "domain/entity",
            "repository",
            "repository/impl/postgresql",
        ] {
            assert!(out.contains(&format!("\t\"user-profile/{pkg}\"\n")));
        }
    }
}
