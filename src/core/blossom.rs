//! Maximum-weight matching on general graphs.
//!
//! Primal-dual blossom algorithm in Galil's O(V^3) scheme: alternating
//! trees are grown from exposed vertices over tight edges, odd cycles are
//! contracted into blossom records, and when no tight edge extends the
//! search the dual variables are shifted by the minimum slack. For every
//! edge `weight(u, v) <= dual(u) + dual(v)` (with blossom duals folded
//! in) and matched edges meet the bound with equality; that pair of
//! invariants certifies optimality at termination.
//!
//! With `max_cardinality` the result covers as many vertices as the graph
//! allows and maximizes total weight among matchings of that cardinality.
//!
//! Identifiers are arena indices: `0..n` are vertices, `n..2n` are blossom
//! records recycled through a free list. Vertices are scanned in ascending
//! index order and edges in input order, so an identical input graph always
//! produces the identical matching.

/// Solver edge: two distinct vertex indices and an integer weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEdge {
    pub u: usize,
    pub v: usize,
    pub weight: i64,
}

/// Sentinel for "no vertex / no endpoint / no blossom"
const NONE: usize = usize::MAX;

const LABEL_FREE: u8 = 0;
/// Outer vertex: even depth in an alternating tree
const LABEL_S: u8 = 1;
/// Inner vertex: odd depth in an alternating tree
const LABEL_T: u8 = 2;
/// Breadcrumb bit set while scanning for a common tree ancestor
const LABEL_CRUMB: u8 = 4;

/// Compute a maximum-weight matching over `vertex_count` vertices.
///
/// Returns the mate of each vertex, or `None` for uncovered vertices.
/// With `max_cardinality` the matching first covers as many vertices as
/// possible and only then maximizes total weight. Uncovered vertices are
/// an expected outcome (odd populations, isolated vertices), never an
/// error.
pub fn maximum_weight_matching(
    vertex_count: usize,
    edges: &[WeightedEdge],
    max_cardinality: bool,
) -> Vec<Option<usize>> {
    if vertex_count == 0 || edges.is_empty() {
        return vec![None; vertex_count];
    }

    let mut solver = Solver::new(vertex_count, edges, max_cardinality);
    solver.solve();

    (0..vertex_count)
        .map(|v| {
            let p = solver.mate[v];
            if p == NONE {
                None
            } else {
                Some(solver.endpoint[p])
            }
        })
        .collect()
}

/// All solver state, indexed by vertex (`0..n`), blossom (`n..2n`) or
/// edge endpoint (`2k` and `2k + 1` for edge `k`).
struct Solver<'a> {
    edges: &'a [WeightedEdge],
    nvertex: usize,
    max_cardinality: bool,
    /// endpoint[p]: vertex at endpoint `p` of edge `p / 2`
    endpoint: Vec<usize>,
    /// neighbend[v]: remote endpoints of the edges incident to `v`
    neighbend: Vec<Vec<usize>>,
    /// mate[v]: remote endpoint of v's matched edge, or NONE
    mate: Vec<usize>,
    label: Vec<u8>,
    /// labelend[b]: endpoint through which `b` acquired its label
    labelend: Vec<usize>,
    /// inblossom[v]: top-level blossom containing vertex `v`
    inblossom: Vec<usize>,
    blossomparent: Vec<usize>,
    blossomchilds: Vec<Vec<usize>>,
    blossombase: Vec<usize>,
    /// blossomendps[b]: endpoints of the edges connecting consecutive childs
    blossomendps: Vec<Vec<usize>>,
    /// bestedge[b]: least-slack candidate edge out of vertex/blossom `b`
    bestedge: Vec<usize>,
    /// blossombestedges[b]: least-slack edges to each neighbouring S-blossom
    blossombestedges: Vec<Option<Vec<usize>>>,
    unusedblossoms: Vec<usize>,
    dualvar: Vec<i64>,
    allowedge: Vec<bool>,
    queue: Vec<usize>,
}

impl<'a> Solver<'a> {
    fn new(nvertex: usize, edges: &'a [WeightedEdge], max_cardinality: bool) -> Self {
        let nedge = edges.len();
        let maxweight = edges.iter().map(|e| e.weight).max().unwrap_or(0).max(0);

        let mut endpoint = Vec::with_capacity(2 * nedge);
        let mut neighbend = vec![Vec::new(); nvertex];
        for (k, e) in edges.iter().enumerate() {
            debug_assert!(e.u < nvertex && e.v < nvertex && e.u != e.v);
            endpoint.push(e.u);
            endpoint.push(e.v);
            neighbend[e.u].push(2 * k + 1);
            neighbend[e.v].push(2 * k);
        }

        let mut dualvar = vec![maxweight; nvertex];
        dualvar.resize(2 * nvertex, 0);

        let mut blossombase: Vec<usize> = (0..nvertex).collect();
        blossombase.resize(2 * nvertex, NONE);

        Self {
            edges,
            nvertex,
            max_cardinality,
            endpoint,
            neighbend,
            mate: vec![NONE; nvertex],
            label: vec![LABEL_FREE; 2 * nvertex],
            labelend: vec![NONE; 2 * nvertex],
            inblossom: (0..nvertex).collect(),
            blossomparent: vec![NONE; 2 * nvertex],
            blossomchilds: vec![Vec::new(); 2 * nvertex],
            blossombase,
            blossomendps: vec![Vec::new(); 2 * nvertex],
            bestedge: vec![NONE; 2 * nvertex],
            blossombestedges: vec![None; 2 * nvertex],
            unusedblossoms: (nvertex..2 * nvertex).collect(),
            dualvar,
            allowedge: vec![false; nedge],
            queue: Vec::new(),
        }
    }

    /// Slack of edge `k`: dual(u) + dual(v) - 2 * weight. Zero means tight.
    fn slack(&self, k: usize) -> i64 {
        let e = &self.edges[k];
        self.dualvar[e.u] + self.dualvar[e.v] - 2 * e.weight
    }

    fn blossom_leaves_into(&self, b: usize, out: &mut Vec<usize>) {
        if b < self.nvertex {
            out.push(b);
        } else {
            for &child in &self.blossomchilds[b] {
                self.blossom_leaves_into(child, out);
            }
        }
    }

    fn blossom_leaves(&self, b: usize) -> Vec<usize> {
        let mut leaves = Vec::new();
        self.blossom_leaves_into(b, &mut leaves);
        leaves
    }

    /// Child of blossom `b` at cyclic position `j` (negative wraps)
    fn child_at(&self, b: usize, j: isize) -> usize {
        let len = self.blossomchilds[b].len() as isize;
        self.blossomchilds[b][j.rem_euclid(len) as usize]
    }

    /// Connecting endpoint of blossom `b` at cyclic position `j`
    fn endp_at(&self, b: usize, j: isize) -> usize {
        let len = self.blossomendps[b].len() as isize;
        self.blossomendps[b][j.rem_euclid(len) as usize]
    }

    /// Label vertex `w` (and its top-level blossom) as S or T, acquired
    /// through endpoint `p`. Labeling a T-vertex immediately extends the
    /// tree through its matched edge.
    fn assign_label(&mut self, w: usize, t: u8, p: usize) {
        let b = self.inblossom[w];
        debug_assert!(self.label[w] == LABEL_FREE && self.label[b] == LABEL_FREE);
        self.label[w] = t;
        self.label[b] = t;
        self.labelend[w] = p;
        self.labelend[b] = p;
        self.bestedge[w] = NONE;
        self.bestedge[b] = NONE;

        if t == LABEL_S {
            let leaves = self.blossom_leaves(b);
            self.queue.extend(leaves);
        } else if t == LABEL_T {
            let base = self.blossombase[b];
            debug_assert!(self.mate[base] != NONE);
            let mate_endpoint = self.mate[base];
            self.assign_label(self.endpoint[mate_endpoint], LABEL_S, mate_endpoint ^ 1);
        }
    }

    /// Trace back from `v` and `w` towards their tree roots, dropping
    /// breadcrumbs, until the paths meet (returning the common ancestor's
    /// base vertex) or both hit roots (returning NONE: an augmenting path).
    fn scan_blossom(&mut self, v: usize, w: usize) -> usize {
        let mut path = Vec::new();
        let mut base = NONE;
        let mut v = v;
        let mut w = w;

        loop {
            let b = self.inblossom[v];
            if self.label[b] & LABEL_CRUMB != 0 {
                base = self.blossombase[b];
                break;
            }
            debug_assert_eq!(self.label[b], LABEL_S);
            path.push(b);
            self.label[b] = LABEL_S | LABEL_CRUMB;
            debug_assert_eq!(self.labelend[b], self.mate[self.blossombase[b]]);

            if self.labelend[b] == NONE {
                // Reached a tree root.
                v = NONE;
            } else {
                v = self.endpoint[self.labelend[b]];
                let bt = self.inblossom[v];
                debug_assert_eq!(self.label[bt], LABEL_T);
                debug_assert!(self.labelend[bt] != NONE);
                v = self.endpoint[self.labelend[bt]];
            }

            // Alternate between the two paths.
            if w != NONE {
                std::mem::swap(&mut v, &mut w);
            }
            if v == NONE {
                break;
            }
        }

        for b in path {
            self.label[b] = LABEL_S;
        }
        base
    }

    /// Contract the odd cycle through edge `k` and common ancestor `base`
    /// into a new blossom record.
    fn add_blossom(&mut self, base: usize, k: usize) {
        let (v, w) = (self.edges[k].u, self.edges[k].v);
        let bb = self.inblossom[base];
        let mut bv = self.inblossom[v];
        let mut bw = self.inblossom[w];

        // At most n/2 blossoms can be live at once, so a slot is free.
        let b = self
            .unusedblossoms
            .pop()
            .expect("blossom arena has a free slot");
        self.blossombase[b] = base;
        self.blossomparent[b] = NONE;
        self.blossomparent[bb] = b;

        let mut path = Vec::new();
        let mut endps = Vec::new();

        // Trace back from v to the base.
        while bv != bb {
            self.blossomparent[bv] = b;
            path.push(bv);
            endps.push(self.labelend[bv]);
            debug_assert!(self.labelend[bv] != NONE);
            let vertex = self.endpoint[self.labelend[bv]];
            bv = self.inblossom[vertex];
        }
        path.push(bb);
        path.reverse();
        endps.reverse();
        endps.push(2 * k);

        // Trace back from w to the base.
        while bw != bb {
            self.blossomparent[bw] = b;
            path.push(bw);
            endps.push(self.labelend[bw] ^ 1);
            debug_assert!(self.labelend[bw] != NONE);
            let vertex = self.endpoint[self.labelend[bw]];
            bw = self.inblossom[vertex];
        }

        self.blossomchilds[b] = path;
        self.blossomendps[b] = endps;

        debug_assert_eq!(self.label[bb], LABEL_S);
        self.label[b] = LABEL_S;
        self.labelend[b] = self.labelend[bb];
        self.dualvar[b] = 0;

        // Relabel the leaves; former T-vertices become S and join the queue.
        for leaf in self.blossom_leaves(b) {
            if self.label[self.inblossom[leaf]] == LABEL_T {
                self.queue.push(leaf);
            }
            self.inblossom[leaf] = b;
        }

        // Merge the childs' least-slack edge lists into the new blossom's.
        let mut bestedgeto = vec![NONE; 2 * self.nvertex];
        let childs = self.blossomchilds[b].clone();
        for bv in childs {
            let nblists: Vec<Vec<usize>> = match self.blossombestedges[bv].take() {
                Some(list) => vec![list],
                None => self
                    .blossom_leaves(bv)
                    .iter()
                    .map(|&leaf| self.neighbend[leaf].iter().map(|&p| p / 2).collect())
                    .collect(),
            };
            for nblist in nblists {
                for edge in nblist {
                    let e = self.edges[edge];
                    // The endpoint outside the new blossom (if any).
                    let j = if self.inblossom[e.v] == b { e.u } else { e.v };
                    let bj = self.inblossom[j];
                    if bj != b
                        && self.label[bj] == LABEL_S
                        && (bestedgeto[bj] == NONE
                            || self.slack(edge) < self.slack(bestedgeto[bj]))
                    {
                        bestedgeto[bj] = edge;
                    }
                }
            }
            self.bestedge[bv] = NONE;
        }

        let merged: Vec<usize> = bestedgeto.into_iter().filter(|&e| e != NONE).collect();
        self.bestedge[b] = NONE;
        for &edge in &merged {
            if self.bestedge[b] == NONE || self.slack(edge) < self.slack(self.bestedge[b]) {
                self.bestedge[b] = edge;
            }
        }
        self.blossombestedges[b] = Some(merged);
    }

    /// Undo the contraction of blossom `b`, turning its childs back into
    /// top-level blossoms. During a stage (`endstage == false`) a
    /// T-blossom's childs are relabeled to keep the tree consistent.
    fn expand_blossom(&mut self, b: usize, endstage: bool) {
        let childs = self.blossomchilds[b].clone();
        for &s in &childs {
            self.blossomparent[s] = NONE;
            if s < self.nvertex {
                self.inblossom[s] = s;
            } else if endstage && self.dualvar[s] == 0 {
                self.expand_blossom(s, endstage);
            } else {
                for leaf in self.blossom_leaves(s) {
                    self.inblossom[leaf] = s;
                }
            }
        }

        if !endstage && self.label[b] == LABEL_T {
            // Relabel the path from the entry child to the base; the
            // remaining childs become free or get pulled in as T-blossoms.
            debug_assert!(self.labelend[b] != NONE);
            let entrychild = self.inblossom[self.endpoint[self.labelend[b] ^ 1]];
            let num_childs = self.blossomchilds[b].len() as isize;
            let entry_index = self.blossomchilds[b]
                .iter()
                .position(|&c| c == entrychild)
                .expect("entry child is a sub-blossom of the expanding blossom");

            let mut j = entry_index as isize;
            let jstep: isize;
            let endptrick: usize;
            if entry_index % 2 == 1 {
                // Odd start index: go forward and wrap around.
                j -= num_childs;
                jstep = 1;
                endptrick = 0;
            } else {
                // Even start index: go backward.
                jstep = -1;
                endptrick = 1;
            }

            let mut p = self.labelend[b];
            while j != 0 {
                // Relabel the T-sub-blossom.
                self.label[self.endpoint[p ^ 1]] = LABEL_FREE;
                let q = self.endp_at(b, j - endptrick as isize) ^ endptrick ^ 1;
                self.label[self.endpoint[q]] = LABEL_FREE;
                self.assign_label(self.endpoint[p ^ 1], LABEL_T, p);
                // The connecting edges are tight; allow them.
                self.allowedge[self.endp_at(b, j - endptrick as isize) / 2] = true;
                j += jstep;
                p = self.endp_at(b, j - endptrick as isize) ^ endptrick;
                self.allowedge[p / 2] = true;
                j += jstep;
            }

            // Relabel the base sub-blossom without stepping through to its
            // mate (the tree already continues through it).
            let base_child = self.child_at(b, 0);
            self.label[self.endpoint[p ^ 1]] = LABEL_T;
            self.label[base_child] = LABEL_T;
            self.labelend[self.endpoint[p ^ 1]] = p;
            self.labelend[base_child] = p;
            self.bestedge[base_child] = NONE;

            // Walk the remaining childs; any that contain a labeled vertex
            // become T-blossoms, the rest stay free.
            j += jstep;
            while self.child_at(b, j) != entrychild {
                let bv = self.child_at(b, j);
                if self.label[bv] == LABEL_S {
                    j += jstep;
                    continue;
                }
                let mut labeled = NONE;
                for leaf in self.blossom_leaves(bv) {
                    if self.label[leaf] != LABEL_FREE {
                        labeled = leaf;
                        break;
                    }
                }
                if labeled != NONE {
                    debug_assert_eq!(self.label[labeled], LABEL_T);
                    debug_assert_eq!(self.inblossom[labeled], bv);
                    self.label[labeled] = LABEL_FREE;
                    self.label[self.endpoint[self.mate[self.blossombase[bv]]]] = LABEL_FREE;
                    let through = self.labelend[labeled];
                    self.assign_label(labeled, LABEL_T, through);
                }
                j += jstep;
            }
        }

        // Recycle the record.
        self.label[b] = LABEL_FREE;
        self.labelend[b] = NONE;
        self.blossomchilds[b].clear();
        self.blossomendps[b].clear();
        self.blossombase[b] = NONE;
        self.blossombestedges[b] = None;
        self.bestedge[b] = NONE;
        self.unusedblossoms.push(b);
    }

    /// Swap matched and unmatched edges around blossom `b` so that vertex
    /// `v` becomes its base.
    fn augment_blossom(&mut self, b: usize, v: usize) {
        // Bubble up from v to an immediate child of b.
        let mut t = v;
        while self.blossomparent[t] != b {
            t = self.blossomparent[t];
        }
        if t >= self.nvertex {
            self.augment_blossom(t, v);
        }

        let num_childs = self.blossomchilds[b].len() as isize;
        let entry_index = self.blossomchilds[b]
            .iter()
            .position(|&c| c == t)
            .expect("entry child is a sub-blossom of the augmenting blossom");

        let mut j = entry_index as isize;
        let jstep: isize;
        let endptrick: usize;
        if entry_index % 2 == 1 {
            j -= num_childs;
            jstep = 1;
            endptrick = 0;
        } else {
            jstep = -1;
            endptrick = 1;
        }

        // Flip matched/unmatched along the cycle from t to the base.
        while j != 0 {
            j += jstep;
            let child = self.child_at(b, j);
            let p = self.endp_at(b, j - endptrick as isize) ^ endptrick;
            if child >= self.nvertex {
                self.augment_blossom(child, self.endpoint[p]);
            }
            j += jstep;
            let child = self.child_at(b, j);
            if child >= self.nvertex {
                self.augment_blossom(child, self.endpoint[p ^ 1]);
            }
            self.mate[self.endpoint[p]] = p ^ 1;
            self.mate[self.endpoint[p ^ 1]] = p;
        }

        // Rotate the child list so the new base is first.
        self.blossomchilds[b].rotate_left(entry_index);
        self.blossomendps[b].rotate_left(entry_index);
        self.blossombase[b] = self.blossombase[self.blossomchilds[b][0]];
        debug_assert_eq!(self.blossombase[b], v);
    }

    /// Augment the matching along the path through tight edge `k`,
    /// flipping matched edges back to both tree roots.
    fn augment_matching(&mut self, k: usize) {
        let (v, w) = (self.edges[k].u, self.edges[k].v);

        for (start, start_endpoint) in [(v, 2 * k + 1), (w, 2 * k)] {
            let mut s = start;
            let mut p = start_endpoint;
            loop {
                let bs = self.inblossom[s];
                debug_assert_eq!(self.label[bs], LABEL_S);
                debug_assert_eq!(self.labelend[bs], self.mate[self.blossombase[bs]]);
                if bs >= self.nvertex {
                    self.augment_blossom(bs, s);
                }
                self.mate[s] = p;

                if self.labelend[bs] == NONE {
                    // Reached a tree root.
                    break;
                }
                let t = self.endpoint[self.labelend[bs]];
                let bt = self.inblossom[t];
                debug_assert_eq!(self.label[bt], LABEL_T);
                debug_assert!(self.labelend[bt] != NONE);
                s = self.endpoint[self.labelend[bt]];
                let j = self.endpoint[self.labelend[bt] ^ 1];
                debug_assert_eq!(self.blossombase[bt], t);
                if bt >= self.nvertex {
                    self.augment_blossom(bt, j);
                }
                self.mate[j] = self.labelend[bt];
                p = self.labelend[bt] ^ 1;
            }
        }
    }

    fn solve(&mut self) {
        // Each stage augments the matching by one edge or proves optimality.
        for _stage in 0..self.nvertex {
            self.label.fill(LABEL_FREE);
            self.bestedge.fill(NONE);
            for entry in &mut self.blossombestedges {
                *entry = None;
            }
            self.allowedge.fill(false);
            self.queue.clear();

            // Grow trees from all exposed vertices.
            for v in 0..self.nvertex {
                if self.mate[v] == NONE && self.label[self.inblossom[v]] == LABEL_FREE {
                    self.assign_label(v, LABEL_S, NONE);
                }
            }

            let mut augmented = false;
            loop {
                // Scan S-vertices for tight edges.
                while !augmented {
                    let v = match self.queue.pop() {
                        Some(v) => v,
                        None => break,
                    };
                    debug_assert_eq!(self.label[self.inblossom[v]], LABEL_S);

                    for idx in 0..self.neighbend[v].len() {
                        let p = self.neighbend[v][idx];
                        let k = p / 2;
                        let w = self.endpoint[p];
                        if self.inblossom[v] == self.inblossom[w] {
                            continue;
                        }

                        let mut kslack = 0;
                        if !self.allowedge[k] {
                            kslack = self.slack(k);
                            if kslack <= 0 {
                                self.allowedge[k] = true;
                            }
                        }

                        if self.allowedge[k] {
                            if self.label[self.inblossom[w]] == LABEL_FREE {
                                // C1: grow the tree through w's matched edge.
                                self.assign_label(w, LABEL_T, p ^ 1);
                            } else if self.label[self.inblossom[w]] == LABEL_S {
                                // C2: either a blossom or an augmenting path.
                                let base = self.scan_blossom(v, w);
                                if base != NONE {
                                    self.add_blossom(base, k);
                                } else {
                                    self.augment_matching(k);
                                    augmented = true;
                                    break;
                                }
                            } else if self.label[w] == LABEL_FREE {
                                debug_assert_eq!(self.label[self.inblossom[w]], LABEL_T);
                                self.label[w] = LABEL_T;
                                self.labelend[w] = p ^ 1;
                            }
                        } else if self.label[self.inblossom[w]] == LABEL_S {
                            let b = self.inblossom[v];
                            if self.bestedge[b] == NONE || kslack < self.slack(self.bestedge[b]) {
                                self.bestedge[b] = k;
                            }
                        } else if self.label[w] == LABEL_FREE {
                            if self.bestedge[w] == NONE || kslack < self.slack(self.bestedge[w]) {
                                self.bestedge[w] = k;
                            }
                        }
                    }
                }

                if augmented {
                    break;
                }

                // No tight edge extends any tree: find the minimum delta.
                let mut deltatype = -1;
                let mut delta = 0i64;
                let mut deltaedge = NONE;
                let mut deltablossom = NONE;

                if !self.max_cardinality {
                    // delta1: minimum vertex dual (termination bound).
                    deltatype = 1;
                    delta = self.dualvar[..self.nvertex]
                        .iter()
                        .copied()
                        .min()
                        .unwrap_or(0)
                        .max(0);
                }

                // delta2: minimum slack from an S-vertex to a free vertex.
                for v in 0..self.nvertex {
                    if self.label[self.inblossom[v]] == LABEL_FREE && self.bestedge[v] != NONE {
                        let d = self.slack(self.bestedge[v]);
                        if deltatype == -1 || d < delta {
                            delta = d;
                            deltatype = 2;
                            deltaedge = self.bestedge[v];
                        }
                    }
                }

                // delta3: half the minimum slack between two S-blossoms.
                for b in 0..2 * self.nvertex {
                    if self.blossomparent[b] == NONE
                        && self.label[b] == LABEL_S
                        && self.bestedge[b] != NONE
                    {
                        let kslack = self.slack(self.bestedge[b]);
                        debug_assert_eq!(kslack % 2, 0);
                        let d = kslack / 2;
                        if deltatype == -1 || d < delta {
                            delta = d;
                            deltatype = 3;
                            deltaedge = self.bestedge[b];
                        }
                    }
                }

                // delta4: minimum dual of a T-blossom (triggers expansion).
                for b in self.nvertex..2 * self.nvertex {
                    if self.blossombase[b] != NONE
                        && self.blossomparent[b] == NONE
                        && self.label[b] == LABEL_T
                        && (deltatype == -1 || self.dualvar[b] < delta)
                    {
                        delta = self.dualvar[b];
                        deltatype = 4;
                        deltablossom = b;
                    }
                }

                if deltatype == -1 {
                    // Max-cardinality optimum reached; one final dual
                    // adjustment keeps the certificate verifiable.
                    deltatype = 1;
                    delta = self.dualvar[..self.nvertex]
                        .iter()
                        .copied()
                        .min()
                        .unwrap_or(0)
                        .max(0);
                }

                // Shift the duals.
                for v in 0..self.nvertex {
                    match self.label[self.inblossom[v]] {
                        LABEL_S => self.dualvar[v] -= delta,
                        LABEL_T => self.dualvar[v] += delta,
                        _ => {}
                    }
                }
                for b in self.nvertex..2 * self.nvertex {
                    if self.blossombase[b] != NONE && self.blossomparent[b] == NONE {
                        match self.label[b] {
                            LABEL_S => self.dualvar[b] += delta,
                            LABEL_T => self.dualvar[b] -= delta,
                            _ => {}
                        }
                    }
                }

                match deltatype {
                    1 => break,
                    2 => {
                        // An S-free edge became tight; resume from its S end.
                        self.allowedge[deltaedge] = true;
                        let (i, j) = (self.edges[deltaedge].u, self.edges[deltaedge].v);
                        let from = if self.label[self.inblossom[i]] == LABEL_FREE {
                            j
                        } else {
                            i
                        };
                        self.queue.push(from);
                    }
                    3 => {
                        // An S-S edge became tight.
                        self.allowedge[deltaedge] = true;
                        self.queue.push(self.edges[deltaedge].u);
                    }
                    _ => {
                        self.expand_blossom(deltablossom, false);
                    }
                }
            }

            if !augmented {
                break;
            }

            // End of stage: expand S-blossoms whose dual dropped to zero.
            for b in self.nvertex..2 * self.nvertex {
                if self.blossomparent[b] == NONE
                    && self.blossombase[b] != NONE
                    && self.label[b] == LABEL_S
                    && self.dualvar[b] == 0
                {
                    self.expand_blossom(b, true);
                }
            }
        }
    }
}
