use std::convert::Infallible;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use multiagent_search::{AgentIndex, GameState, SearchAgent, Strategy};

/// A uniform tree where every agent has the same number of moves and scores depend on the path
#[derive(Debug, Clone, Copy)]
struct Uniform {
    num_agents: usize,
    branching: u64,
    path: u64,
}

impl GameState for Uniform {
    type Action = u64;
    type Error = Infallible;

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<u64> {
        (0..self.branching).collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &u64) -> Result<Self, Infallible> {
        Ok(Self {
            path: self.path.wrapping_mul(6364136223846793005).wrapping_add(action + 1),
            ..*self
        })
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }
}

fn score(game: &Uniform) -> f64 {
    ((game.path >> 33) % 1000) as f64
}

fn bench_strategies(c: &mut Criterion, num_agents: usize, depth: usize) {
    let root = Uniform {
        num_agents,
        branching: 4,
        path: 17,
    };

    let mut group = c.benchmark_group(format!("{} agents: Depth {}", num_agents, depth));

    for strategy in Strategy::ALL {
        let agent = SearchAgent::from_fn(strategy, score, depth).unwrap();

        group.bench_function(strategy.to_string(), |b| {
            b.iter(|| agent.search(black_box(&root)).unwrap())
        });
    }

    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_strategies(c, 2, 2);
    bench_strategies(c, 2, 3);
    bench_strategies(c, 3, 2);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
