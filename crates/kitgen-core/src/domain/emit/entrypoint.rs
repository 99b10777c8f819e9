//! `main.go`: wires the list-all route and starts the listener.
//!
//! Only one route is generated; it shows the decoder → endpoint → encoder
//! wiring that the remaining four operations follow.

use super::{EmitContext, GoWriter, Import, Operation};
use crate::domain::naming::lower_initial;

pub fn emit(ctx: &EmitContext<'_>) -> String {
    let model = ctx.model();
    let list = Operation::List;
    let handler = format!("{}Handler", lower_initial(&list.method(model)));
    let route = format!("/{}s", ctx.names.lower_initial_model);

    let mut w = GoWriter::file(&ctx.header(), "main");
    w.imports(&[
        vec![Import::new("log"), Import::new("net/http")],
        vec![
            Import::aliased("httptransport", "github.com/go-kit/kit/transport/http"),
            Import::new("github.com/gorilla/mux"),
        ],
        vec![ctx.package("endpoint"), ctx.package("service")],
    ]);

    w.blank();
    w.open("func main() {");
    w.line("router := mux.NewRouter()");
    w.line("assignRoutes(router)");
    w.line("http.Handle(\"/\", router)");
    w.line(format!(
        "log.Fatal(http.ListenAndServe(\":{}\", nil))",
        ctx.options.listen_port
    ));
    w.close("}");

    w.blank();
    w.open("func assignRoutes(router *mux.Router) *mux.Router {");
    w.line("svc := service.MakeServiceImpl()");
    w.blank();
    w.open(format!("{handler} := httptransport.NewServer("));
    w.line(format!("endpoint.{}(svc),", list.endpoint_constructor(model)));
    w.line(format!(
        "endpoint.MakeDecoder(endpoint.{}{{}}),",
        list.request_type(model)
    ));
    w.line("endpoint.EncodeResponse,");
    w.close(")");
    w.blank();
    w.line(format!(
        "router.Handle(\"{route}\", {handler}).Methods(\"GET\")"
    ));
    w.line("return router");
    w.close("}");

    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        emit::fixtures::{order_config, render, render_with},
        value_objects::GenerationOptions,
    };

    #[test]
    fn wires_the_list_route_on_the_default_port() {
        let out = render(&order_config(), emit);
        assert!(out.contains("package main\n"));
        assert!(out.contains("\t\"order-service/endpoint\"\n\t\"order-service/service\"\n"));
        assert!(out.contains("log.Fatal(http.ListenAndServe(\":8080\", nil))"));
        assert!(out.contains("listOrdersHandler := httptransport.NewServer("));
        assert!(out.contains("\t\tendpoint.MakeListOrdersEndpoint(svc),\n"));
        assert!(out.contains("\t\tendpoint.MakeDecoder(endpoint.ListOrdersRequest{}),\n"));
        assert!(out.contains("router.Handle(\"/orders\", listOrdersHandler).Methods(\"GET\")"));
    }

    #[test]
    fn listen_port_is_configurable() {
        let options = GenerationOptions::default().with_listen_port(9090);
        let out = render_with(&order_config(), &options, emit);
        assert!(out.contains("http.ListenAndServe(\":9090\", nil)"));
    }
}
