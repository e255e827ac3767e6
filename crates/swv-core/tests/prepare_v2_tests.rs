use std::collections::HashSet;

use serde_json::{Value, json};
use swv_core::parse::{self, SwaggerDocument};
use swv_core::parse::spec::SwaggerV2;
use swv_core::view::{Method, ReturnView, ViewModel};
use swv_core::{PrepareOptions, SchemaNode, TypeConverter, prepare};

const PETSTORE: &str = include_str!("fixtures/petstore-2.0.json");

/// Tags every node so tests can see which converter call produced what.
struct TagConverter;

impl TypeConverter for TagConverter {
    fn convert_type(
        &self,
        node: SchemaNode<'_>,
        _swagger: &SwaggerV2,
        _options: &PrepareOptions<'_>,
    ) -> Value {
        match node {
            SchemaNode::Parameter(p) => json!(format!("param:{}", p.name)),
            SchemaNode::Schema(s) => match s.get("$ref") {
                Some(r) => json!(format!("ref:{}", r.as_str().unwrap_or_default())),
                None => json!(format!(
                    "type:{}",
                    s.get("type").and_then(Value::as_str).unwrap_or("any")
                )),
            },
        }
    }
}

fn petstore() -> SwaggerDocument {
    parse::from_json(PETSTORE).unwrap()
}

fn view(doc: &SwaggerDocument) -> ViewModel {
    let options = PrepareOptions::new(doc)
        .with_module_name("petstore")
        .with_class_name("PetStore");
    prepare(&options).unwrap()
}

fn method<'a>(vm: &'a ViewModel, name: &str) -> &'a Method {
    vm.methods
        .iter()
        .find(|m| m.method_name == name)
        .unwrap_or_else(|| panic!("no method {name}"))
}

#[test]
fn prepare_petstore_methods() {
    let doc = petstore();
    let vm = view(&doc);

    let names: Vec<&str> = vm.methods.iter().map(|m| m.method_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "findPets",
            "addPet",
            "getPetsById",
            "deletePetsById",
            "store_place_order"
        ]
    );
    assert_eq!(vm.module_name, "petstore");
    assert_eq!(vm.class_name, "PetStore");
    assert_eq!(vm.description.as_deref(), Some("A sample pet store"));
    assert_eq!(vm.domain, "https://petstore.example.com/v2");

    let get = method(&vm, "getPetsById");
    assert_eq!(get.method, "GET");
    assert!(get.is_get);
    assert!(!get.is_post);
    assert_eq!(get.path, "/pets/{id}");
    assert_eq!(get.class_name, "PetStore");
}

#[test]
fn prepare_positional_markers() {
    let doc = petstore();
    let vm = view(&doc);

    let first_path: Vec<bool> = vm.methods.iter().map(|m| m.is_first_path).collect();
    assert_eq!(first_path, vec![true, false, true, false, true]);

    let not_first: Vec<bool> = vm.methods.iter().map(|m| m.not_first_method).collect();
    assert_eq!(not_first, vec![false, true, true, true, true]);

    assert!(vm.methods.iter().all(|m| !m.not_first_path && !m.is_first_method));
}

#[test]
fn prepare_shared_and_excluded_parameters() {
    let doc = petstore();
    let vm = view(&doc);

    let find = method(&vm, "findPets");
    let names: Vec<&str> = find
        .parameters
        .iter()
        .map(|p| p.parameter.name.as_str())
        .collect();
    assert_eq!(names, vec!["limit", "status"]);
    assert!(find.by_in.header.is_empty());
    assert!(!find.by_in.has_header);

    let status = &find.parameters[1];
    assert!(status.is_singleton);
    assert_eq!(status.singleton, Some(json!("available")));
    assert!(status.not_first_parameter);
    assert!(status.not_first_by_in);
    assert_eq!(status.cardinality, "?");

    assert_eq!(find.by_in.query.len(), 2);
    assert!(!find.by_in.has_query_and_body);
}

#[test]
fn prepare_path_level_parameters_follow_operation_parameters() {
    let doc = petstore();
    let vm = view(&doc);

    let get = method(&vm, "getPetsById");
    assert_eq!(get.parameters.len(), 1);
    let id = &get.parameters[0];
    assert_eq!(id.parameter.name, "id");
    assert!(id.is_path_parameter);
    assert_eq!(id.cardinality, "");
    assert!(get.by_in.has_path);
}

#[test]
fn prepare_query_and_body() {
    let doc = petstore();
    let vm = view(&doc);

    let add = method(&vm, "addPet");
    assert!(add.by_in.has_body);
    assert!(add.by_in.has_query);
    assert!(add.by_in.has_query_and_body);
    assert!(add.parameters[0].is_body_parameter);
    assert!(!add.parameters[0].not_first_parameter);
    assert!(add.parameters[1].not_first_parameter);
    assert!(!add.parameters[1].not_first_by_in);
}

#[test]
fn prepare_shared_parameter_views_are_independent() {
    let doc = petstore();
    let vm = view(&doc);

    // `limit` is first in findPets and second in addPet.
    let in_find = &method(&vm, "findPets").parameters[0];
    let in_add = &method(&vm, "addPet").parameters[1];
    assert_eq!(in_find.parameter.name, "limit");
    assert_eq!(in_add.parameter.name, "limit");
    assert!(!in_find.not_first_parameter);
    assert!(in_add.not_first_parameter);

    // The document itself is untouched.
    assert_eq!(doc, petstore());
}

#[test]
fn prepare_security_flags() {
    let doc = petstore();
    let vm = view(&doc);

    assert!(vm.is_secure);
    assert!(vm.is_secure_token);
    assert!(vm.is_secure_api_key);
    assert!(!vm.is_secure_basic);

    let find = method(&vm, "findPets");
    assert!(find.is_secure);
    assert!(find.is_secure_token);
    assert!(!find.is_secure_api_key);

    let add = method(&vm, "addPet");
    assert!(!add.is_secure);
    assert!(!add.is_secure_token);

    let delete = method(&vm, "deletePetsById");
    assert!(delete.is_secure);
    assert!(delete.is_secure_api_key);
    assert!(!delete.is_secure_token);
}

#[test]
fn prepare_headers() {
    let doc = petstore();
    let vm = view(&doc);

    let find = method(&vm, "findPets");
    assert_eq!(find.headers.len(), 2);
    assert_eq!(find.headers[0].name, "Accept");
    assert_eq!(find.headers[0].value, "'application/json'");
    assert_eq!(find.headers[1].name, "Content-Type");
    assert_eq!(find.headers[1].value, "'application/json'");

    let order = method(&vm, "store_place_order");
    assert_eq!(order.headers[0].value, "'application/json, application/xml'");
}

#[test]
fn prepare_return_selection() {
    let doc = petstore();
    let options = PrepareOptions::new(&doc).with_type_converter(&TagConverter);
    let vm = prepare(&options).unwrap();

    let find = method(&vm, "findPets");
    assert_eq!(find.responses.len(), 2);
    assert_eq!(find.responses[0].response_code, "200");
    assert_eq!(find.responses[1].response_code, "default");
    assert_eq!(find.return_computed_type(), Some(&json!("type:array")));

    // 404 is listed first but never qualifies.
    let get = method(&vm, "getPetsById");
    assert_eq!(get.responses[0].response_code, "404");
    assert_eq!(
        get.return_computed_type(),
        Some(&json!("ref:#/definitions/Pet"))
    );

    // 201 qualifies like 200.
    let add = method(&vm, "addPet");
    assert!(matches!(add.return_type, Some(ReturnView::Schema(_))));

    // No schema anywhere, no default type.
    assert!(method(&vm, "deletePetsById").return_type.is_none());
}

#[test]
fn prepare_default_type_only_when_nothing_qualifies() {
    let doc = petstore();
    let options = PrepareOptions::new(&doc).with_default_type(json!("void"));
    let vm = prepare(&options).unwrap();

    assert_eq!(
        method(&vm, "deletePetsById").return_type,
        Some(ReturnView::Default(json!("void")))
    );
    assert!(matches!(
        method(&vm, "getPetsById").return_type,
        Some(ReturnView::Schema(_))
    ));
}

#[test]
fn prepare_without_converter_attaches_no_types() {
    let doc = petstore();
    let vm = view(&doc);
    let value = serde_json::to_value(&vm).unwrap();
    assert!(!value.to_string().contains("__type"));
}

#[test]
fn prepare_custom_type_property_name() {
    let doc = petstore();
    let options = PrepareOptions::new(&doc)
        .with_type_converter(&TagConverter)
        .with_type_property_name("tsType");
    let vm = prepare(&options).unwrap();
    let value = serde_json::to_value(&vm).unwrap();

    let param = &value["methods"][0]["parameters"][0];
    assert_eq!(param["tsType"], json!("param:limit"));
    assert!(param.get("__type").is_none());
    assert_eq!(value["methods"][0]["return"]["tsType"], json!("type:array"));
    assert_eq!(value["definitions"][0]["tsType"], json!("type:object"));
}

#[test]
fn prepare_tag_grouping() {
    let doc = petstore();
    let vm = view(&doc);
    let swagger2 = vm.swagger2.as_ref().unwrap();

    assert!(swagger2.has_tags);
    let groups: Vec<&str> = swagger2.by_tags.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(groups, vec!["pets", "none", "store,pets"]);

    let pets = &swagger2.by_tags[0];
    assert_eq!(pets.methods.len(), 3);
    assert_eq!(pets.tags.len(), 1);
    assert_eq!(pets.tags[0].description.as_deref(), Some("Everything about pets"));
    assert!(!pets.methods[0].not_first_by_tag);
    assert!(pets.methods[1].not_first_by_tag);
    assert!(method(&vm, "addPet").not_first_by_tag);

    let none = &swagger2.by_tags[1];
    assert_eq!(none.methods[0].method_name, "deletePetsById");
    assert!(none.tags.is_empty());

    let store = &swagger2.by_tags[2];
    let tag_names: Vec<&str> = store.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tag_names, vec!["store", "pets"]);
}

#[test]
fn prepare_tag_group_omits_unknown_tags() {
    let doc = parse::from_json(
        &json!({
            "swagger": "2.0",
            "info": {},
            "tags": [{ "name": "known" }],
            "paths": {
                "/a": { "get": { "tags": ["known", "ghost"], "responses": {} } }
            }
        })
        .to_string(),
    )
    .unwrap();
    let vm = view(&doc);
    let group = &vm.swagger2.as_ref().unwrap().by_tags[0];
    assert_eq!(group.name, "known,ghost");
    assert_eq!(group.tags.len(), 1);
    assert_eq!(group.tags[0].name, "known");
}

#[test]
fn prepare_definitions() {
    let doc = petstore();
    let options = PrepareOptions::new(&doc).with_type_converter(&TagConverter);
    let vm = prepare(&options).unwrap();

    let names: Vec<&str> = vm.definitions.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Pet", "Error", "Order", "PetList"]);

    let pet = &vm.definitions[0];
    assert_eq!(pet.description.as_deref(), Some("A pet"));
    assert_eq!(pet.computed.value(), Some(&json!("type:object")));
    let props = pet.properties.as_ref().unwrap();
    let prop_names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(prop_names, vec!["id", "name", "tag"]);
    assert_eq!(props[1].computed.value(), Some(&json!("type:string")));

    assert!(vm.definitions[2].properties.is_none());
}

#[test]
fn prepare_echoes_document_metadata() {
    let doc = petstore();
    let vm = view(&doc);
    let swagger2 = vm.swagger2.as_ref().unwrap();
    assert_eq!(swagger2.info.title.as_deref(), Some("Petstore"));
    assert_eq!(swagger2.host.as_deref(), Some("petstore.example.com"));
    assert_eq!(swagger2.base_path.as_deref(), Some("/v2/"));
    assert_eq!(swagger2.schemes, vec!["https"]);
    assert_eq!(swagger2.tags.len(), 2);
}

fn two_op_doc(paths: Value) -> SwaggerDocument {
    parse::from_json(&json!({ "swagger": "2.0", "info": {}, "paths": paths }).to_string())
        .unwrap()
}

#[test]
fn prepare_collisions_on_same_path() {
    let doc = two_op_doc(json!({
        "/pets": {
            "get": { "responses": {} },
            "GET": { "responses": {} },
            "Get": { "responses": {} }
        }
    }));
    let vm = view(&doc);
    let names: Vec<&str> = vm.methods.iter().map(|m| m.method_name.as_str()).collect();
    assert_eq!(names, vec!["getPets", "getPets_1", "getPets_2"]);
}

#[test]
fn prepare_collisions_across_name_sources() {
    let doc = two_op_doc(json!({
        "/pets": { "get": { "responses": {} } },
        "/pets/": { "get": { "responses": {} } },
        "/other": { "get": { "operationId": "getPets", "responses": {} } }
    }));
    let vm = view(&doc);
    let names: Vec<&str> = vm.methods.iter().map(|m| m.method_name.as_str()).collect();
    assert_eq!(names, vec!["getPets", "getPets_1", "getPets_2"]);

    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn prepare_unknown_verbs_and_locations_are_skipped() {
    let doc = two_op_doc(json!({
        "/items": {
            "trace": { "responses": {} },
            "search": { "responses": {} },
            "post": {
                "parameters": [
                    { "name": "session", "in": "cookie" },
                    { "name": "q", "in": "query" }
                ],
                "responses": {}
            }
        }
    }));
    let vm = view(&doc);
    assert_eq!(vm.methods.len(), 1);

    let post = &vm.methods[0];
    assert_eq!(post.parameters.len(), 2);
    assert_eq!(post.by_in.query.len(), 1);
    let session = &post.parameters[0];
    assert!(!session.is_query_parameter && !session.is_header_parameter);
}

#[test]
fn prepare_proxy_headers_are_skipped() {
    let doc = two_op_doc(json!({
        "/items": {
            "get": {
                "parameters": [
                    { "name": "X-AppEngine-Country", "in": "header", "x-proxy-header": true },
                    { "name": "page", "in": "query" }
                ],
                "responses": {}
            }
        }
    }));
    let vm = view(&doc);
    let names: Vec<&str> = vm.methods[0]
        .parameters
        .iter()
        .map(|p| p.parameter.name.as_str())
        .collect();
    assert_eq!(names, vec!["page"]);
    assert!(!vm.methods[0].parameters[0].not_first_parameter);
}

#[test]
fn prepare_unresolved_reference() {
    let doc = two_op_doc(json!({
        "/items": {
            "get": {
                "parameters": [{ "$ref": "#/parameters/missing" }],
                "responses": {}
            }
        }
    }));
    let options = PrepareOptions::new(&doc);
    let err = prepare(&options).unwrap_err();
    assert!(matches!(
        err,
        swv_core::error::TransformError::UnresolvedReference(ref r) if r == "#/parameters/missing"
    ));
}

#[test]
fn prepare_serializes_template_keys() {
    let doc = petstore();
    let vm = view(&doc);
    let value = serde_json::to_value(&vm).unwrap();

    assert_eq!(value["moduleName"], json!("petstore"));
    assert_eq!(value["isSecureToken"], json!(true));
    assert_eq!(value["hasTags"], json!(true));
    assert_eq!(value["byTags"][0]["name"], json!("pets"));

    let find = &value["methods"][0];
    assert_eq!(find["methodName"], json!("findPets"));
    assert_eq!(find["isGET"], json!(true));
    assert_eq!(find["tagGroup"], json!("pets"));
    assert_eq!(find["byIn"]["hasQuery"], json!(true));
    assert_eq!(find["byIn"]["hasQueryAndBody"], json!(false));
    assert_eq!(find["responses"][0]["responseCode"], json!("200"));
    assert_eq!(find["return"]["type"], json!("array"));

    let status = &find["parameters"][1];
    assert_eq!(status["in"], json!("query"));
    assert_eq!(status["camelCaseName"], json!("status"));
    assert_eq!(status["isQueryParameter"], json!(true));
    assert_eq!(status["isSingleton"], json!(true));
    assert_eq!(status["notFirstByIn"], json!(true));
    assert_eq!(status["cardinality"], json!("?"));
}

#[test]
fn prepare_reference_siblings_exclude_bindings() {
    let doc = parse::from_json(
        &json!({
            "swagger": "2.0",
            "info": {},
            "parameters": {
                "token": { "name": "X-Token", "in": "header", "type": "string" },
                "forwarded": { "name": "X-Forwarded-For", "in": "header", "type": "string" }
            },
            "paths": {
                "/items": {
                    "get": {
                        "parameters": [
                            { "$ref": "#/parameters/token", "x-exclude-from-bindings": true },
                            { "$ref": "#/parameters/forwarded", "x-proxy-header": true },
                            { "$ref": "#/parameters/missing", "x-exclude-from-bindings": true }
                        ],
                        "responses": {}
                    }
                }
            }
        })
        .to_string(),
    )
    .unwrap();
    let vm = view(&doc);
    let get = &vm.methods[0];
    assert!(get.parameters.is_empty());
    assert!(!get.by_in.has_header);
}
