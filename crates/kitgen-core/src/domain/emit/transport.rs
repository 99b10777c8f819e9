//! Transport layer: `endpoint/{decoder,encoder,view,endpoint}.go`.

use super::{
    EmitContext, GoWriter, Import, Operation, tagged_rows,
    writer::{is_free_ident, local_ident},
};

/// Identifiers already bound inside an endpoint closure or its file scope.
const ENDPOINT_SCOPE: &[&str] = &[
    "s", "v", "req", "err", "request", "ctx", "context", "endpoint", "domain", "Response",
];

/// Request shapes for the five operations plus a generic JSON decoder.
pub fn emit_decoder(ctx: &EmitContext<'_>) -> String {
    let model = ctx.model();
    let mut w = GoWriter::file(&ctx.header(), "endpoint");
    w.imports(&[vec![
        Import::new("context"),
        Import::new("encoding/json"),
        Import::new("errors"),
        Import::new("io"),
        Import::new("net/http"),
        Import::new("reflect"),
    ]]);

    let id_field = vec![vec![
        "Id".to_string(),
        "string".to_string(),
        "`json:\"id\"`".to_string(),
    ]];
    let write_fields = tagged_rows(ctx.write_attributes());

    for op in Operation::ALL {
        w.blank();
        match op {
            Operation::List => {
                w.struct_type(&op.request_type(model), &[]);
            }
            Operation::Get | Operation::Delete => {
                w.struct_type(&op.request_type(model), &id_field);
            }
            Operation::Create => {
                w.line("// Remove the attributes that are not required as part of the request.");
                w.struct_type(&op.request_type(model), &write_fields);
            }
            Operation::Update => {
                w.struct_type(&op.request_type(model), &write_fields);
            }
        }
    }

    w.blank();
    w.line("// MakeDecoder builds a request decoder that yields a fresh value of the");
    w.line("// same type as request, filled from the JSON body. An empty body leaves");
    w.line("// the zero value.");
    w.open(
        "func MakeDecoder(request interface{}) func(_ context.Context, r *http.Request) (interface{}, error) {",
    );
    w.line("t := reflect.TypeOf(request)");
    w.open("return func(_ context.Context, r *http.Request) (interface{}, error) {");
    w.line("ptr := reflect.New(t)");
    w.open("if err := json.NewDecoder(r.Body).Decode(ptr.Interface()); err != nil && !errors.Is(err, io.EOF) {");
    w.line("return nil, err");
    w.close("}");
    w.line("return ptr.Elem().Interface(), nil");
    w.close("}");
    w.close("}");

    w.finish()
}

/// Response envelope and JSON encoder.
pub fn emit_encoder(ctx: &EmitContext<'_>) -> String {
    let mut w = GoWriter::file(&ctx.header(), "endpoint");
    w.imports(&[vec![
        Import::new("context"),
        Import::new("encoding/json"),
        Import::new("net/http"),
    ]]);

    w.blank();
    w.struct_type(
        "Response",
        &[
            vec![
                "Data".into(),
                "interface{}".into(),
                "`json:\"data\"`".into(),
            ],
            vec![
                "Errors".into(),
                "[]error".into(),
                "`json:\"errors\"`".into(),
            ],
        ],
    );

    w.blank();
    w.open(
        "func EncodeResponse(_ context.Context, w http.ResponseWriter, response interface{}) error {",
    );
    w.line("w.Header().Set(\"Content-Type\", \"application/json; charset=utf-8\")");
    w.line("return json.NewEncoder(w).Encode(response)");
    w.close("}");

    w.finish()
}

/// View projection of the entity with identical fields.
pub fn emit_view(ctx: &EmitContext<'_>) -> String {
    let model = ctx.model();
    let attributes = ctx.config.attributes();
    let param = local_ident(&ctx.names.lower_initial_model, &["entity"]);

    let mut w = GoWriter::file(&ctx.header(), "endpoint");
    w.imports(&[vec![ctx.package("domain/entity")]]);

    w.blank();
    w.struct_type(&format!("{model}View"), &tagged_rows(attributes));

    w.blank();
    w.open(format!(
        "func to{model}View({param} entity.{model}) {model}View {{"
    ));
    if attributes.is_empty() {
        w.line(format!("return {model}View{{}}"));
    } else {
        w.open(format!("return {model}View{{"));
        let rows: Vec<Vec<String>> = attributes
            .iter()
            .map(|a| vec![format!("{}:", a.name()), format!("{param}.{},", a.name())])
            .collect();
        w.aligned(&rows);
        w.close("}");
    }
    w.close("}");

    w.finish()
}

/// One go-kit endpoint constructor per canonical operation.
pub fn emit_endpoint(ctx: &EmitContext<'_>) -> String {
    let model = ctx.model();
    let view = format!("to{model}View");
    let item = local_ident(&ctx.names.lower_initial_model, ENDPOINT_SCOPE);
    let items = local_ident(&format!("{}s", ctx.names.lower_initial_model), ENDPOINT_SCOPE);
    let result = if is_free_ident(&ctx.names.abbreviation, ENDPOINT_SCOPE) {
        ctx.names.abbreviation.clone()
    } else {
        "result".to_string()
    };

    let mut w = GoWriter::file(&ctx.header(), "endpoint");
    w.imports(&[
        vec![Import::new("context")],
        vec![Import::new("github.com/go-kit/kit/endpoint")],
        vec![ctx.package("domain")],
    ]);

    for op in Operation::ALL {
        w.blank();
        w.open(format!(
            "func {}(s domain.Service) endpoint.Endpoint {{",
            op.endpoint_constructor(model)
        ));
        let request = if op == Operation::List { "_" } else { "request" };
        w.open(format!(
            "return func(_ context.Context, {request} interface{{}}) (interface{{}}, error) {{"
        ));

        match op {
            Operation::List => {
                w.line(format!("v, err := s.{}", op.call(model)));
                error_guard(&mut w);
                w.line(format!("{items} := make([]{model}View, 0, len(v))"));
                w.open(format!("for _, {item} := range v {{"));
                w.line(format!("{items} = append({items}, {view}({item}))"));
                w.close("}");
                w.line(format!("return Response{{Data: {items}, Errors: nil}}, nil"));
            }
            Operation::Get => {
                w.line(format!("req := request.({})", op.request_type(model)));
                w.line(format!("{result}, err := s.{}(req.Id)", op.method(model)));
                error_guard(&mut w);
                w.line(format!("return Response{{Data: {view}({result}), Errors: nil}}, nil"));
            }
            Operation::Create | Operation::Update => {
                let params = op.params_type(model).unwrap_or_default();
                w.line(format!("req := request.({})", op.request_type(model)));
                w.line(format!(
                    "{result}, err := s.{}(domain.{params}(req))",
                    op.method(model)
                ));
                error_guard(&mut w);
                w.line(format!("return Response{{Data: {view}({result}), Errors: nil}}, nil"));
            }
            Operation::Delete => {
                w.line(format!("req := request.({})", op.request_type(model)));
                w.open(format!("if err := s.{}(req.Id); err != nil {{", op.method(model)));
                w.line("return Response{Data: nil, Errors: []error{err}}, err");
                w.close("}");
                w.line("return Response{Data: nil, Errors: nil}, nil");
            }
        }

        w.close("}");
        w.close("}");
    }

    w.finish()
}

fn error_guard(w: &mut GoWriter) {
    w.open("if err != nil {");
    w.line("return Response{Data: nil, Errors: []error{err}}, err");
    w.close("}");
}
