use colored::*;
use shortest_path::{Error, Graph, GraphStore, MutableGraph, Path, VertexId};
use std::collections::{BTreeMap, HashMap, HashSet};

// Straight moves cost 10, diagonal moves 14, so costs stay integral
const STRAIGHT: u64 = 10;
const DIAGONAL: u64 = 14;

/// Represents a city grid with buildings and streets
struct CityGrid {
    width: usize,
    height: usize,
    buildings: HashSet<(usize, usize)>,
    locations: BTreeMap<&'static str, (usize, usize)>,
}

impl CityGrid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buildings: HashSet::new(),
            locations: BTreeMap::new(),
        }
    }

    fn add_block(&mut self, xs: std::ops::Range<usize>, ys: std::ops::Range<usize>) {
        for x in xs {
            for y in ys.clone() {
                self.buildings.insert((x, y));
            }
        }
    }

    fn is_walkable(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && !self.buildings.contains(&(x, y))
    }

    fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize, u64)> {
        let directions = [
            (0, -1, STRAIGHT), (1, 0, STRAIGHT), (0, 1, STRAIGHT), (-1, 0, STRAIGHT),
            (1, -1, DIAGONAL), (1, 1, DIAGONAL), (-1, 1, DIAGONAL), (-1, -1, DIAGONAL),
        ];

        directions
            .iter()
            .filter_map(|&(dx, dy, cost)| {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 {
                    return None;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                self.is_walkable(nx, ny).then_some((nx, ny, cost))
            })
            .collect()
    }
}

/// Street network built from a city grid
struct CityGraph {
    store: GraphStore,
    by_cell: HashMap<(usize, usize), VertexId>,
    by_vertex: HashMap<VertexId, (usize, usize)>,
}

fn city_to_graph(city: &CityGrid) -> Result<CityGraph, Error> {
    let mut store = GraphStore::with_capacity(city.width * city.height);
    let mut by_cell = HashMap::new();
    let mut by_vertex = HashMap::new();

    for y in 0..city.height {
        for x in 0..city.width {
            if city.is_walkable(x, y) {
                let v = store.add_vertex();
                by_cell.insert((x, y), v);
                by_vertex.insert(v, (x, y));
            }
        }
    }

    for y in 0..city.height {
        for x in 0..city.width {
            let Some(&v) = by_cell.get(&(x, y)) else {
                continue;
            };
            for (nx, ny, cost) in city.neighbors(x, y) {
                store.add_edge(v, by_cell[&(nx, ny)], cost)?;
            }
        }
    }

    Ok(CityGraph {
        store,
        by_cell,
        by_vertex,
    })
}

fn create_sample_city() -> CityGrid {
    let mut city = CityGrid::new(25, 14);

    city.add_block(3..7, 2..8); // Office district
    city.add_block(10..15, 4..9); // Shopping center
    city.add_block(18..22, 8..13); // Residential area
    city.add_block(1..4, 10..13); // Hospital complex
    // Wall around the island in the south east, reachable from nowhere
    city.add_block(21..25, 0..1);
    city.add_block(21..22, 0..4);
    city.add_block(21..25, 4..5);

    city.locations.insert("home", (0, 0));
    city.locations.insert("work", (24, 13));
    city.locations.insert("cafe", (8, 1));
    city.locations.insert("gym", (16, 8));
    city.locations.insert("island", (23, 2));

    city
}

fn render(city: &CityGrid, graph: &CityGraph, path: &Path<u64>) {
    let on_path: HashSet<(usize, usize)> = path
        .vertices
        .iter()
        .filter_map(|v| graph.by_vertex.get(v).copied())
        .collect();

    println!("{}", format!("┌{}┐", "─".repeat(city.width)).bright_white());
    for y in 0..city.height {
        print!("{}", "│".bright_white());
        for x in 0..city.width {
            let landmark = city
                .locations
                .iter()
                .find(|(_, &cell)| cell == (x, y))
                .map(|(name, _)| name.chars().next().unwrap_or('?').to_ascii_uppercase());

            let cell = match landmark {
                Some(symbol) => symbol.to_string().bright_green().bold(),
                None if !city.is_walkable(x, y) => "█".on_bright_black().white(),
                None if on_path.contains(&(x, y)) => "*".bright_yellow().bold(),
                None => "·".bright_black(),
            };
            print!("{}", cell);
        }
        println!("{}", "│".bright_white());
    }
    println!("{}", format!("└{}┘", "─".repeat(city.width)).bright_white());
}

fn route(city: &CityGrid, graph: &CityGraph, from: &str, to: &str) -> Result<(), Error> {
    let source = graph.by_cell[&city.locations[from]];
    let target = graph.by_cell[&city.locations[to]];

    println!("\n{} {} → {}", "🚶".bright_yellow(), from.bright_white().bold(), to.bright_white().bold());
    match graph.store.shortest_path(source, target) {
        Ok(path) => {
            render(city, graph, &path);
            println!(
                "{} {} steps, cost {} (edges {:?})",
                "✅".bright_green(),
                path.len(),
                path.cost,
                path.edges.iter().map(|e| e.get()).collect::<Vec<_>>()
            );
            Ok(())
        }
        Err(Error::NoPathFound { .. }) => {
            println!("{} {}", "❌".bright_red(), "No route exists".bright_red());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("{}", "🏙️  CITY ROUTES  🏙️".bright_cyan().bold());
    let city = create_sample_city();
    let graph = city_to_graph(&city)?;
    println!(
        "Street graph has {} vertices and {} edges",
        graph.store.vertex_count(),
        graph.store.edge_count()
    );

    route(&city, &graph, "home", "work")?;
    route(&city, &graph, "cafe", "gym")?;
    route(&city, &graph, "work", "home")?;
    route(&city, &graph, "home", "island")?;

    Ok(())
}
