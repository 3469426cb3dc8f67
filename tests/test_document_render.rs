use petgraph::graph::UnGraph;
use serde_json::{json, Value};
use webloom::{Document, Label, LabelKind, LabelSet, LayerOptions, NodeData};

fn parse_data_file(data: &str) -> Value {
    let json_text = data
        .strip_prefix("var webloomData = ")
        .and_then(|rest| rest.strip_suffix(';'))
        .expect("data file should assign the webloomData global");
    serde_json::from_str(json_text).expect("data file payload should be JSON")
}

fn advanced_document() -> Document {
    let n = 6usize;
    let mut web = Document::new("advanced");

    web.display.width = Some(200);
    web.display.height = Some(200);
    web.display.link_length = Some(20.0);
    web.display.charge = Some(200.0);
    web.display.gravity = Some(0.3);
    web.display.name = Some("Advanced".to_string());
    web.display.network_name = Some("snake".to_string());
    web.display.color_by = Some("hunger".to_string());
    web.display.size_by = Some("isHead".to_string());
    web.display.color_palette = Some("Set2".to_string());
    web.display.size_invert_binary = Some(true);
    web.display.node_names = Some(
        ["dane", "sebastian", "manny", "brock", "ted", "donnie"]
            .into_iter()
            .map(String::from)
            .collect(),
    );

    let hunger = web.display.labels.get_or_create("hunger");
    hunger.kind = Some(LabelKind::Scalar);
    hunger.values = Some(vec![
        json!(4),
        json!(9),
        json!(2),
        json!(4),
        json!(12.1),
        json!(5),
    ]);

    let snake_edges: Vec<[usize; 2]> = (0..n - 1).map(|i| [i + 1, i + 2]).collect();
    let mut snake_labels = LabelSet::new();
    snake_labels.insert(
        "isHead",
        Label::new(vec![false, false, false, false, false, true]),
    );
    snake_labels.insert(
        "slithering",
        Label::new(vec![1, 2, 2, 3, 1, 2]).with_kind(LabelKind::Categorical),
    );
    web.networks
        .get_or_create("snake")
        .add_layer_with(
            snake_edges,
            LayerOptions {
                labels: Some(snake_labels),
                ..Default::default()
            },
        )
        .expect("snake layer");

    let starfish_edges: Vec<[usize; 2]> = (0..n - 1).map(|i| [0, i + 1]).collect();
    let mut starfish_labels = LabelSet::new();
    starfish_labels.insert(
        "texture",
        Label::new(vec!["gooey", "fishy", "chewy", "crunchy", "chewy", "gooey"]),
    );
    starfish_labels.insert("power", Label::new(vec![1.0, 3.0, 3.8, 0.2, 1.0, 3.1415]));
    web.networks
        .get_or_create("starfish")
        .add_layer_with(
            starfish_edges,
            LayerOptions {
                labels: Some(starfish_labels),
                ..Default::default()
            },
        )
        .expect("starfish layer");

    let small_snake_edges: Vec<[usize; 2]> = (0..n - 3).map(|i| [i, i + 1]).collect();
    web.networks
        .get_or_create("small_snake")
        .add_layer_with(
            small_snake_edges,
            LayerOptions {
                nodes: Some(4),
                ..Default::default()
            },
        )
        .expect("small snake layer");

    web
}

#[test]
fn test_advanced_document_save_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let web = advanced_document();

    let (html_path, data_path) = web.save(dir.path()).expect("save");
    assert_eq!(html_path, dir.path().join("advanced.html"));
    assert_eq!(data_path, dir.path().join("advanced.json"));

    let data = std::fs::read_to_string(&data_path).expect("data file");
    let value = parse_data_file(&data);

    let display = &value["display"];
    assert_eq!(display["name"], json!("Advanced"));
    assert_eq!(display["w"], json!(200));
    assert_eq!(display["h"], json!(200));
    assert_eq!(display["l"], json!(20.0));
    assert_eq!(display["c"], json!(200.0));
    assert_eq!(display["g"], json!(0.3));
    assert_eq!(display["networkName"], json!("snake"));
    assert_eq!(display["colorBy"], json!("hunger"));
    assert_eq!(display["sizeBy"], json!("isHead"));
    assert_eq!(display["colorPalette"], json!("Set2"));
    assert_eq!(display["sizeInvertBinary"], json!(true));
    assert_eq!(
        display["nodeNames"],
        json!(["dane", "sebastian", "manny", "brock", "ted", "donnie"])
    );
    assert_eq!(
        display["labels"]["hunger"],
        json!({ "type": "scalar", "value": [4, 9, 2, 4, 12.1, 5] })
    );

    let snake_layer = &value["network"]["snake"]["layers"][0];
    assert_eq!(
        snake_layer["adjList"],
        json!([[1, 2], [2, 3], [3, 4], [4, 5], [5, 6]])
    );
    assert_eq!(
        snake_layer["labels"]["isHead"],
        json!({ "value": [false, false, false, false, false, true] })
    );
    assert_eq!(snake_layer["labels"]["slithering"]["type"], json!("categorical"));
    assert!(!snake_layer
        .as_object()
        .expect("layer object")
        .contains_key("nodes"));

    let texture = value["network"]["starfish"]["layers"][0]["labels"]["texture"]
        .as_object()
        .expect("texture label");
    assert!(!texture.contains_key("type"));
    assert_eq!(texture["value"], json!(["gooey", "fishy", "chewy", "crunchy", "chewy", "gooey"]));

    let small_snake_layer = &value["network"]["small_snake"]["layers"][0];
    assert_eq!(small_snake_layer["adjList"], json!([[0, 1], [1, 2], [2, 3]]));
    assert_eq!(small_snake_layer["nodes"], json!(4));
    assert_eq!(small_snake_layer["labels"], Value::Null);

    // networks appear in first-touch order in the emitted file
    let snake_pos = data.find(r#""snake": {"#).expect("snake key");
    let starfish_pos = data.find(r#""starfish": {"#).expect("starfish key");
    let small_snake_pos = data.find(r#""small_snake": {"#).expect("small_snake key");
    assert!(snake_pos < starfish_pos);
    assert!(starfish_pos < small_snake_pos);

    let html = std::fs::read_to_string(&html_path).expect("html file");
    assert!(html.contains("<title>webloom advanced</title>"));
    assert!(html.contains(data_path.to_str().expect("utf-8 path")));
}

#[test]
fn test_imported_graph_lands_in_the_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut web = Document::new("proteins");

    let mut graph: UnGraph<NodeData, Option<f64>> = UnGraph::new_undirected();
    let a = graph.add_node(NodeData::new("a").with_attribute("mass", 11.2));
    let b = graph.add_node(NodeData::new("b"));
    let c = graph.add_node(NodeData::new("c").with_attribute("mass", 8.9));
    graph.add_edge(a, b, Some(5.0));
    graph.add_edge(b, c, None);

    web.networks
        .get_or_create("binding")
        .add_layer_from_graph(&graph)
        .expect("import");

    let (_, data_path) = web.save(dir.path()).expect("save");
    let value = parse_data_file(&std::fs::read_to_string(&data_path).expect("data file"));

    let layer = &value["network"]["binding"]["layers"][0];
    assert_eq!(layer["adjList"], json!([[0, 1, 5.0], [1, 2]]));
    assert_eq!(layer["nodes"], json!(3));
    assert_eq!(
        layer["labels"]["mass"],
        json!({ "value": [11.2, null, 8.9] })
    );
    assert_eq!(
        layer["labels"]["name"],
        json!({ "value": ["a", "b", "c"] })
    );
}

#[test]
fn test_matrix_network_renders_both_directions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut web = Document::new("grid");

    web.networks
        .get_or_create("ring")
        .add_layer(vec![
            vec![0, 1, 0, 1],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
            vec![1, 0, 1, 0],
        ])
        .expect("matrix layer");

    let (_, data_path) = web.save(dir.path()).expect("save");
    let value = parse_data_file(&std::fs::read_to_string(&data_path).expect("data file"));

    assert_eq!(
        value["network"]["ring"]["layers"][0]["adjList"],
        json!([
            [0, 1, 1],
            [0, 3, 1],
            [1, 0, 1],
            [1, 2, 1],
            [2, 1, 1],
            [2, 3, 1],
            [3, 0, 1],
            [3, 2, 1]
        ])
    );
}
