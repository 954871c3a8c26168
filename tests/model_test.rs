use linkgraph::graph::{
    ErrorKind, IdentifiableNode, LangString, Literal, NamedNode, Node, NodeReference, ObjectType,
    ResultSet,
};
use linkgraph::query::GraphPath;
use linkgraph::rdf::vocabulary::{XSD_NS, XSD_STRING};
use linkgraph::rdf::{Model, NamespaceManager};

const MODS: &str = "http://www.loc.gov/mods/v3#";
const P: &str = "http://example.org/p";
const Q: &str = "http://example.org/q";
const A: &str = "http://example.org/a";

fn mods(local: &str) -> String {
    format!("{}{}", MODS, local)
}

fn typed(local: &str) -> Node {
    Node::typed(&mods(local)).unwrap()
}

/// A MODS record for a printed book
fn record() -> NamedNode {
    NamedNode::typed("http://example.org/record/PPN1234", &mods("mods"))
        .unwrap()
        .with_item(
            typed("titleInfo")
                .with_item(typed("title").with_item(LangString::new("Hoc est corpus meum", Some("la")).unwrap()))
                .with_item(typed("subTitle").with_item("Eine Predigt")),
        )
        .with_item(
            typed("name")
                .with(mods("type"), "personal")
                .with_item(typed("namePart").with(mods("type"), "family").with_item("Pineau"))
                .with_item(typed("namePart").with(mods("type"), "given").with_item("Severin"))
                .with_item(NodeReference::new("http://d-nb.info/gnd/118594893").unwrap()),
        )
        .with_item(
            typed("originInfo")
                .with_item(
                    typed("dateIssued")
                        .with_item(Literal::new("1641", Some(&format!("{}gYear", XSD_NS))).unwrap()),
                )
                .with_item(typed("place").with_item(typed("placeTerm").with_item("Leipzig"))),
        )
}

#[test]
fn test_record_round_trip() {
    let record = record();
    let model = record.to_model();
    assert!(!model.is_empty());

    let result = ResultSet::create_from(&model, true).unwrap();
    assert!(result.is_unique_identifiable_node());

    let back = result.named_nodes().next().unwrap();
    assert_eq!(back, &record);
    assert_eq!(back.node(), record.node());
}

#[test]
fn test_read_model_answers_path_queries() {
    let model = record().to_model();
    let result = ResultSet::create_from(&model, true).unwrap();
    let root = result.node().unwrap().content().clone();

    let namespaces = NamespaceManager::new().with_prefix("mods", MODS);
    let path = GraphPath::parse(
        "* * [rdf:type mods:name] * [rdf:type mods:namePart, mods:type family] rdf:_1",
        &namespaces,
    )
    .unwrap();
    assert_eq!(root.find(&path).value().unwrap(), "Pineau");

    let path = GraphPath::parse("* * [rdf:type mods:originInfo] * [rdf:type mods:dateIssued] rdf:_1", &namespaces).unwrap();
    assert_eq!(root.find(&path).join_strings(",", false), "1641");
}

#[test]
fn test_anonymous_roots_are_blank_nodes() {
    let first = typed("note").with_item("first");
    let second = typed("note").with_item("second");
    let results: ResultSet = [first, second].into_iter().map(ObjectType::from).collect();

    let model = results.to_model();
    assert_eq!(model.len(), 4);

    let back = ResultSet::create_from(&model, true).unwrap();
    assert_eq!(back, results);
}

#[test]
fn test_model_from_graph() {
    let model = Model::from(record().to_model().into_graph());
    let text = model.to_string();
    assert!(text.contains("<http://example.org/record/PPN1234>"));
    assert!(text.contains("\"Hoc est corpus meum\"@la"));
}

#[test]
fn test_serde_round_trip() {
    let record = record();
    let json = serde_json::to_string(&record).unwrap();
    let back: NamedNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back.node(), record.node());

    let result: ResultSet = [ObjectType::from(record)].into_iter().collect();
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(serde_json::from_str::<ResultSet>(&json).unwrap(), result);
}

fn read_back(node: &Node) -> Node {
    let result = ResultSet::create_from(&node.to_model(), true).unwrap();
    result.node().unwrap().content().clone()
}

#[test]
fn test_string_datatype_round_trip() {
    let node = Node::new().with(P, Literal::new("x", Some(XSD_STRING)).unwrap());
    assert_eq!(read_back(&node), node);
    assert_eq!(node, Node::new().with(P, Literal::plain("x")));
}

#[test]
fn test_named_node_without_content_reads_as_reference() {
    let mut node = Node::new()
        .with(P, NamedNode::new(A).unwrap())
        .with(Q, "v");

    let back = read_back(&node);
    assert_eq!(
        back.get(P),
        [ObjectType::from(NodeReference::new(A).unwrap())].into_iter().collect::<ResultSet>()
    );
    assert_ne!(back, node);

    node.replace_all_named_nodes_with_no_data_by_node_references(true);
    assert_eq!(back, node);
}

#[test]
fn test_reference_to_described_iri_reads_as_named_node() {
    let node = Node::new()
        .with(P, NodeReference::new(A).unwrap())
        .with(Q, NamedNode::new(A).unwrap().with(Q, "v"));

    let back = read_back(&node);
    for predicate in [P, Q] {
        let values: Vec<&ObjectType> = back.values(predicate).collect();
        assert_eq!(values.len(), 1);
        match values[0] {
            ObjectType::NamedNode(named) => {
                assert_eq!(named.identifier(), A);
                assert_eq!(named.get(Q).value().unwrap(), "v");
            }
            other => panic!("expected a named node under {}, got {:?}", predicate, other),
        }
    }
}

#[test]
fn test_empty_node_reads_as_empty_result() {
    let model = Node::new().to_model();
    assert!(model.is_empty());

    let result = ResultSet::create_from(&model, true).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.node().unwrap_err().kind(), ErrorKind::NotFound);
}
