/// Abstract capacitated directed graph, the boundary between the external
/// loader and the flow algorithms. Validation happens when a
/// `FlowNetwork` is built from it, not on insertion.
#[derive(Debug, Clone)]
pub struct InputGraph<F> {
    vertices: Vec<String>,
    edges: Vec<InputEdge<F>>,
}

#[derive(Debug, Clone)]
pub struct InputEdge<F> {
    pub from: String,
    pub to: String,
    pub capacity: F,
}

impl<F> Default for InputGraph<F> {
    fn default() -> Self {
        InputGraph { vertices: Vec::new(), edges: Vec::new() }
    }
}

impl<F> InputGraph<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, name: impl Into<String>) {
        self.vertices.push(name.into());
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, capacity: F) {
        self.edges.push(InputEdge { from: from.into(), to: to.into(), capacity });
    }

    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }

    pub fn edges(&self) -> &[InputEdge<F>] {
        &self.edges
    }
}
