use crate::base::Error;

/// Marks the absence of a neighbor crossing
const NONE: usize = usize::MAX;

/// Holds an ordered sequence of points of an iso-contour
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    /// x coordinates
    pub x: Vec<f64>,

    /// y coordinates
    pub y: Vec<f64>,

    /// Indicates that the last point repeats the first one
    pub closed: bool,
}

impl Polyline {
    /// Returns the number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Indicates that the polyline has no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Extracts the iso-contour `field = level` using the marching squares algorithm
///
/// The crossing points are linearly interpolated along the cell edges. Ambiguous (saddle)
/// cells are resolved with the average of the four corner values. The segments are then
/// stitched into open polylines (touching the grid boundary) and closed polylines.
///
/// # Input
///
/// * `x` -- the (nx) coordinates along the horizontal axis
/// * `y` -- the (ny) coordinates along the vertical axis
/// * `field` -- the (ny, nx) values with `field[j][i]` corresponding to `(x[i], y[j])`
/// * `level` -- the iso-value
pub fn contour_lines(x: &[f64], y: &[f64], field: &[Vec<f64>], level: f64) -> Result<Vec<Polyline>, Error> {
    let (nx, ny) = (x.len(), y.len());
    if field.len() != ny {
        return Err(Error::LengthMismatch {
            what: "field rows",
            expected: ny,
            actual: field.len(),
        });
    }
    for row in field {
        if row.len() != nx {
            return Err(Error::LengthMismatch {
                what: "field columns",
                expected: nx,
                actual: row.len(),
            });
        }
    }
    if nx < 2 || ny < 2 {
        return Ok(Vec::new());
    }

    let edges = EdgeNumbering { nx, ny };
    let mut crossings = Crossings::new(edges.count());

    // march over cells
    //
    //  3 ---top--- 2
    //  |           |
    // left       right
    //  |           |
    //  0 --bottom- 1
    for j in 0..(ny - 1) {
        for i in 0..(nx - 1) {
            let f = [field[j][i], field[j][i + 1], field[j + 1][i + 1], field[j + 1][i]];
            let sides = [
                edges.horizontal(i, j),
                edges.vertical(i + 1, j),
                edges.horizontal(i, j + 1),
                edges.vertical(i, j),
            ];
            let mut crossed = [NONE; 4];
            let mut n_crossed = 0;
            for k in 0..4 {
                let (a, b) = (k, (k + 1) % 4);
                if (f[a] > level) != (f[b] > level) {
                    crossed[n_crossed] = k;
                    n_crossed += 1;
                    if !crossings.has_point(sides[k]) {
                        let (xa, ya, xb, yb) = edges.endpoints(sides[k], x, y);
                        let (fa, fb) = edge_values(&f, k);
                        let t = (level - fa) / (fb - fa);
                        crossings.set_point(sides[k], xa + t * (xb - xa), ya + t * (yb - ya));
                    }
                }
            }
            match n_crossed {
                2 => crossings.link(sides[crossed[0]], sides[crossed[1]]),
                4 => {
                    let center = (f[0] + f[1] + f[2] + f[3]) / 4.0;
                    if (center > level) == (f[0] > level) {
                        // corners 0 and 2 are connected; cut corners 1 and 3
                        crossings.link(sides[0], sides[1]);
                        crossings.link(sides[2], sides[3]);
                    } else {
                        // corners 1 and 3 are connected; cut corners 0 and 2
                        crossings.link(sides[3], sides[0]);
                        crossings.link(sides[1], sides[2]);
                    }
                }
                _ => (),
            }
        }
    }
    Ok(crossings.stitch())
}

/// Returns the values at the endpoints of side k of a cell, in the order used by [EdgeNumbering::endpoints]
fn edge_values(f: &[f64; 4], k: usize) -> (f64, f64) {
    match k {
        0 => (f[0], f[1]), // bottom: (i,j) → (i+1,j)
        1 => (f[1], f[2]), // right: (i+1,j) → (i+1,j+1)
        2 => (f[3], f[2]), // top: (i,j+1) → (i+1,j+1)
        _ => (f[0], f[3]), // left: (i,j) → (i,j+1)
    }
}

/// Numbers the horizontal edges first, then the vertical edges
struct EdgeNumbering {
    nx: usize,
    ny: usize,
}

impl EdgeNumbering {
    fn n_horizontal(&self) -> usize {
        self.ny * (self.nx - 1)
    }

    fn count(&self) -> usize {
        self.n_horizontal() + self.nx * (self.ny - 1)
    }

    /// Edge from (i,j) to (i+1,j)
    fn horizontal(&self, i: usize, j: usize) -> usize {
        j * (self.nx - 1) + i
    }

    /// Edge from (i,j) to (i,j+1)
    fn vertical(&self, i: usize, j: usize) -> usize {
        self.n_horizontal() + j * self.nx + i
    }

    /// Returns (xa, ya, xb, yb) with a the lower-left endpoint
    fn endpoints(&self, edge: usize, x: &[f64], y: &[f64]) -> (f64, f64, f64, f64) {
        let nh = self.n_horizontal();
        if edge < nh {
            let (i, j) = (edge % (self.nx - 1), edge / (self.nx - 1));
            (x[i], y[j], x[i + 1], y[j])
        } else {
            let e = edge - nh;
            let (i, j) = (e % self.nx, e / self.nx);
            (x[i], y[j], x[i], y[j + 1])
        }
    }
}

/// Holds the crossing points on the edges and their connectivity
struct Crossings {
    points: Vec<Option<(f64, f64)>>,
    neighbors: Vec<[usize; 2]>,
}

impl Crossings {
    fn new(n_edge: usize) -> Self {
        Crossings {
            points: vec![None; n_edge],
            neighbors: vec![[NONE, NONE]; n_edge],
        }
    }

    fn has_point(&self, edge: usize) -> bool {
        self.points[edge].is_some()
    }

    fn set_point(&mut self, edge: usize, x: f64, y: f64) {
        self.points[edge] = Some((x, y));
    }

    fn link(&mut self, a: usize, b: usize) {
        Crossings::attach(&mut self.neighbors[a], b);
        Crossings::attach(&mut self.neighbors[b], a);
    }

    fn attach(slots: &mut [usize; 2], other: usize) {
        if slots[0] == NONE {
            slots[0] = other;
        } else {
            slots[1] = other;
        }
    }

    fn degree(&self, edge: usize) -> usize {
        self.neighbors[edge].iter().filter(|n| **n != NONE).count()
    }

    /// Joins the linked crossings into polylines; open chains first, then closed loops
    fn stitch(&self) -> Vec<Polyline> {
        let n_edge = self.points.len();
        let mut visited = vec![false; n_edge];
        let mut polylines = Vec::new();
        for start in 0..n_edge {
            if !visited[start] && self.degree(start) == 1 {
                polylines.push(self.walk(start, &mut visited));
            }
        }
        for start in 0..n_edge {
            if !visited[start] && self.degree(start) == 2 {
                polylines.push(self.walk(start, &mut visited));
            }
        }
        polylines
    }

    fn walk(&self, start: usize, visited: &mut [bool]) -> Polyline {
        let mut chain = vec![start];
        visited[start] = true;
        let mut current = start;
        loop {
            let next = self.neighbors[current]
                .iter()
                .copied()
                .find(|n| *n != NONE && !visited[*n]);
            match next {
                Some(n) => {
                    visited[n] = true;
                    chain.push(n);
                    current = n;
                }
                None => break,
            }
        }
        let closed = chain.len() > 2 && self.neighbors[current].contains(&start);
        if closed {
            chain.push(start);
        }
        let mut polyline = Polyline {
            x: Vec::with_capacity(chain.len()),
            y: Vec::with_capacity(chain.len()),
            closed,
        };
        for edge in chain {
            if let Some((x, y)) = self.points[edge] {
                polyline.x.push(x);
                polyline.y.push(y);
            }
        }
        polyline
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
