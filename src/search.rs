//! Backward-chaining OR/AND search: `recurse` tries every candidate rule
//! against a goal; `join` proves a conjunction of goals left to right.

use std::rc::Rc;

use log::trace;

use crate::goal::Goal;
use crate::proof_graph::ProofGraphNode;
use crate::proof_state::ProofState;
use crate::similarity::SimilarityFunc;
use crate::unify::unify;

/// OR search: tries to discharge `goal` with every rule still available on
/// this branch.
///
/// Returns two parallel lists, in lockstep: the outgoing proof states and
/// the proof-graph nodes that produced them. A rule that fails to unify is
/// skipped entirely (normal backtracking, not an error). A rule with no
/// body contributes one terminal leaf per successful unification; a rule
/// with a body contributes one node per successful joint proof of that
/// body, found by delegating to [`join`] with `max_depth` unchanged (depth
/// is only spent at AND boundaries, not OR boundaries).
pub fn recurse(
    goal: &Goal,
    max_depth: i32,
    state: &ProofState,
    similarity_func: SimilarityFunc,
    threshold: f64,
) -> (Vec<ProofState>, Vec<Rc<ProofGraphNode>>) {
    let mut out_states = Vec::new();
    let mut out_nodes = Vec::new();

    for rule in state.available_rules.iter() {
        let (new_subs, branch_sim) =
            match unify(rule, goal, &state.substitutions, similarity_func, threshold) {
                Some(result) => result,
                None => continue,
            };
        let carry_sim = branch_sim.min(state.similarity);
        let next_state = state.descend(rule, new_subs.clone(), carry_sim);

        if rule.is_fact() {
            trace!("recurse: {} discharged by fact {} (sim {:.3})", goal, rule, carry_sim);
            let node = Rc::new(ProofGraphNode {
                goal: goal.statement.clone(),
                rule: Rc::clone(rule),
                unification_similarity: branch_sim,
                overall_similarity: carry_sim,
                children: None,
                substitutions: new_subs,
            });
            out_states.push(next_state);
            out_nodes.push(node);
            continue;
        }

        trace!("recurse: {} expanding body of {} (sim {:.3}, depth {})", goal, rule, carry_sim, max_depth);
        let body_goals: Vec<Goal> = rule
            .body
            .iter()
            .map(|atom| Goal::new(atom.clone(), Rc::clone(rule)))
            .collect();
        let (join_states, join_node_lists) =
            join(&body_goals, max_depth, &next_state, similarity_func, threshold);

        for (child_state, child_nodes) in join_states.into_iter().zip(join_node_lists.into_iter()) {
            let overall = child_state.similarity;
            let node = Rc::new(ProofGraphNode {
                goal: goal.statement.clone(),
                rule: Rc::clone(rule),
                unification_similarity: branch_sim,
                overall_similarity: overall,
                children: Some(child_nodes),
                substitutions: child_state.substitutions.clone(),
            });
            out_states.push(child_state);
            out_nodes.push(node);
        }
    }

    (out_states, out_nodes)
}

/// AND search: proves a conjunction of goals left to right.
///
/// Returns the list of distinct complete proofs of the conjunction paired
/// with, for each, the sequence of per-subgoal graph nodes that witness it
/// (one entry per input subgoal, in input order). `max_depth` is spent once
/// per subgoal (via the recursive call into [`recurse`]) and is otherwise
/// held constant across the conjunction — conjunction itself is free.
pub fn join(
    goals: &[Goal],
    max_depth: i32,
    state: &ProofState,
    similarity_func: SimilarityFunc,
    threshold: f64,
) -> (Vec<ProofState>, Vec<Vec<Rc<ProofGraphNode>>>) {
    if max_depth <= 0 {
        trace!("join: depth exhausted");
        return (Vec::new(), Vec::new());
    }

    let (first, rest) = match goals.split_first() {
        Some(split) => split,
        None => return (vec![state.clone()], vec![Vec::new()]),
    };

    let (first_states, first_nodes) = recurse(first, max_depth - 1, state, similarity_func, threshold);

    if rest.is_empty() {
        let nodes = first_nodes.into_iter().map(|n| vec![n]).collect();
        return (first_states, nodes);
    }

    let mut out_states = Vec::new();
    let mut out_nodes = Vec::new();
    for (child_state, child_node) in first_states.into_iter().zip(first_nodes.into_iter()) {
        let (rest_states, rest_node_lists) =
            join(rest, max_depth, &child_state, similarity_func, threshold);
        for (rest_state, mut rest_nodes) in rest_states.into_iter().zip(rest_node_lists.into_iter()) {
            rest_nodes.insert(0, Rc::clone(&child_node));
            out_states.push(rest_state);
            out_nodes.push(rest_nodes);
        }
    }
    (out_states, out_nodes)
}
