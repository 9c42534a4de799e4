use super::*;
use crate::error::GraphTraceError;
use crate::trace::{EventBound, StepData, StepKind};

fn chain() -> Vec<PertTask> {
    vec![
        PertTask::new("A", "Design", 3.0, &[]),
        PertTask::new("B", "Build", 5.0, &["A"]),
        PertTask::new("C", "Test", 4.0, &["B"]),
        PertTask::new("D", "Ship", 3.0, &["C"]),
    ]
}

/// Twelve tasks, with predecessors listed before they are defined
fn twelve_tasks() -> Vec<PertTask> {
    vec![
        PertTask::new("A", "A", 3.0, &[]),
        PertTask::new("B", "B", 1.0, &["A"]),
        PertTask::new("C", "C", 5.0, &["A"]),
        PertTask::new("D", "D", 6.0, &["B"]),
        PertTask::new("E", "E", 4.0, &["B"]),
        PertTask::new("F", "F", 2.0, &["C", "I", "D"]),
        PertTask::new("G", "G", 9.0, &["E", "F"]),
        PertTask::new("H", "H", 5.0, &[]),
        PertTask::new("I", "I", 8.0, &["H"]),
        PertTask::new("J", "J", 2.0, &["H"]),
        PertTask::new("K", "K", 3.0, &["I"]),
        PertTask::new("L", "L", 7.0, &["J", "K"]),
    ]
}

fn construction() -> Vec<PertTask> {
    vec![
        PertTask::new("A", "Studies", 3.0, &[]),
        PertTask::new("B", "Foundations", 5.0, &["A"]),
        PertTask::new("C", "Walls", 4.0, &["B"]),
        PertTask::new("D", "Roof", 3.0, &["C"]),
        PertTask::new("E", "Electricity", 2.0, &["B"]),
        PertTask::new("F", "Finishing", 2.0, &["D", "E"]),
    ]
}

fn run(tasks: &[PertTask]) -> crate::trace::AlgorithmRun<PertResult> {
    schedule(tasks, PertOptions::default()).unwrap()
}

#[test]
fn test_chain_is_fully_critical() {
    let run = run(&chain());
    let result = &run.result;
    assert_eq!(result.project_duration, 15.0);
    assert_eq!(result.critical_path, vec!["A", "B", "C", "D"]);
    for task in &result.schedule {
        assert_eq!(task.total_float, 0.0, "{}", task.task_id);
        assert_eq!(task.free_float, 0.0, "{}", task.task_id);
        assert!(task.is_critical);
    }
    let d = result.task("D").unwrap();
    assert_eq!((d.earliest_start, d.latest_finish), (12.0, 15.0));
}

#[test]
fn test_input_order_does_not_matter() {
    let mut reversed = chain();
    reversed.reverse();
    let run = run(&reversed);
    assert_eq!(run.result.project_duration, 15.0);
    assert_eq!(run.result.critical_path, vec!["A", "B", "C", "D"]);
    let ids: Vec<_> = run.result.schedule.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_twelve_task_schedule() {
    let run = run(&twelve_tasks());
    let result = &run.result;
    assert_eq!(result.project_duration, 24.0);
    assert_eq!(result.critical_path, vec!["H", "I", "F", "G"]);

    let expect = |id: &str, es: f64, ls: f64, total: f64, free: f64| {
        let task = result.task(id).unwrap();
        assert_eq!(task.earliest_start, es, "ES of {}", id);
        assert_eq!(task.latest_start, ls, "LS of {}", id);
        assert_eq!(task.total_float, total, "total float of {}", id);
        assert_eq!(task.free_float, free, "free float of {}", id);
    };
    expect("A", 0.0, 3.0, 3.0, 0.0);
    expect("C", 3.0, 8.0, 5.0, 5.0);
    expect("F", 13.0, 13.0, 0.0, 0.0);
    expect("J", 5.0, 15.0, 10.0, 9.0);
    expect("K", 13.0, 14.0, 1.0, 0.0);
    expect("L", 16.0, 17.0, 1.0, 1.0);
}

#[test]
fn test_schedule_sorted_by_earliest_start() {
    let run = run(&twelve_tasks());
    let starts: Vec<f64> = run.result.schedule.iter().map(|t| t.earliest_start).collect();
    assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(run.result.schedule.len(), 12);
}

#[test]
fn test_phases_are_recorded_in_order() {
    let run = run(&twelve_tasks());
    let steps = run.steps.steps();
    assert_eq!(steps[0].kind, StepKind::Init);
    assert_eq!(run.steps.last().map(|s| s.kind), Some(StepKind::Complete));
    assert_eq!(run.steps.count(StepKind::VisitNode), 12);
    assert_eq!(run.steps.count(StepKind::VisitNodeBack), 12);

    let last_forward = steps.iter().rposition(|s| s.kind == StepKind::VisitNode).unwrap();
    let first_backward = steps.iter().position(|s| s.kind == StepKind::VisitNodeBack).unwrap();
    let first_mark = steps
        .iter()
        .position(|s| s.kind == StepKind::MarkCriticalNode)
        .unwrap();
    assert!(last_forward < first_backward);
    assert!(first_backward < first_mark);

    assert_eq!(
        run.steps.targets(StepKind::VisitNode),
        vec!["A", "H", "B", "C", "I", "J", "D", "E", "K", "F", "L", "G"]
    );
    assert_eq!(run.steps.targets(StepKind::MarkCriticalNode), vec!["H", "I", "F", "G"]);
    assert_eq!(
        run.steps.targets(StepKind::MarkCriticalEdge),
        vec!["H-I", "I-F", "F-G"]
    );
}

#[test]
fn test_pass_steps_carry_task_names() {
    let run = run(&construction());
    let names: Vec<_> = run
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::VisitNode)
        .map(|s| s.aux[scheduler::TASK_NAME_AUX].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Studies", "Foundations", "Walls", "Electricity", "Roof", "Finishing"]
    );

    let back = run
        .steps
        .iter()
        .find(|s| s.kind == StepKind::VisitNodeBack)
        .unwrap();
    assert_eq!(back.aux[scheduler::TASK_NAME_AUX], "Finishing");
    let json = serde_json::to_value(back).unwrap();
    assert_eq!(json["aux"]["name"], "Finishing");
}

#[test]
fn test_junction_earliest_time_only_rises() {
    let run = run(&twelve_tasks());
    let times: Vec<f64> = run
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::UpdateEvent && s.target_id == "n5")
        .filter_map(|s| match s.data {
            StepData::Event {
                bound: EventBound::Earliest,
                time,
                ..
            } => Some(time),
            _ => None,
        })
        .collect();
    assert_eq!(times, vec![8.0, 13.0]);
}

#[test]
fn test_construction_network() {
    let run = run(&construction());
    let result = &run.result;
    assert_eq!(result.project_duration, 17.0);
    assert_eq!(result.critical_path, vec!["A", "B", "C", "D", "F"]);
    assert_eq!(result.task("E").unwrap().total_float, 5.0);

    let network = &result.network;
    let ids: Vec<_> = network.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["start", "n1", "n2", "n3", "n4", "end"]);
    assert_eq!(network.arcs.len(), 6);
    assert!(network.arcs.iter().all(|a| !a.dummy));

    let electricity = network.task_arc("E").unwrap();
    assert_eq!((electricity.source.as_str(), electricity.target.as_str()), ("n2", "n4"));
    assert!(!electricity.critical);
    assert!(network.task_arc("F").unwrap().critical);
    assert_eq!(network.task_arc("F").unwrap().target, "end");

    let end = network.event(END_EVENT).unwrap();
    assert_eq!((end.earliest, end.latest), (17.0, 17.0));
}

#[test]
fn test_shared_predecessor_gets_completion_event() {
    let run = run(&twelve_tasks());
    let network = &run.result.network;
    assert_eq!(network.arcs.len(), 14);

    let i_arc = network.task_arc("I").unwrap();
    assert_eq!((i_arc.source.as_str(), i_arc.target.as_str()), ("n2", "n8"));
    let done = network.event("n8").unwrap();
    assert_eq!(done.kind, EventKind::Completion);

    let dummies: Vec<_> = network.arcs.iter().filter(|a| a.dummy).collect();
    assert_eq!(dummies.len(), 2);
    assert!(dummies.iter().all(|a| a.source == "n8" && a.duration == 0.0));
    let to_f = dummies.iter().find(|a| a.target == "n5").unwrap();
    let to_k = dummies.iter().find(|a| a.target == "n4").unwrap();
    assert!(to_f.critical);
    assert!(!to_k.critical);

    // F's junction waits on C, D and I only
    let junction = network.event("n5").unwrap();
    assert_eq!(junction.label, "C+D+I");
    assert_eq!((junction.earliest, junction.latest), (13.0, 13.0));
}

#[test]
fn test_tolerance_absorbs_rounding() {
    let tasks = vec![
        PertTask::new("A", "", 0.1, &[]),
        PertTask::new("B", "", 0.2, &["A"]),
        PertTask::new("C", "", 0.3, &[]),
    ];
    // 0.1 + 0.2 overshoots 0.3 in binary, leaving every float a hair above zero
    let loose = run(&tasks);
    assert_eq!(loose.result.critical_path, vec!["A", "C", "B"]);
    assert_eq!(loose.result.task("C").unwrap().total_float, 0.0);

    let strict = schedule(&tasks, PertOptions { critical_tolerance: 0.0 }).unwrap();
    assert!(strict.result.critical_path.is_empty());
    assert!(strict.result.task("C").unwrap().total_float > 0.0);
}

#[test]
fn test_empty_project() {
    let run = run(&[]);
    assert_eq!(run.result.project_duration, 0.0);
    assert!(run.result.critical_path.is_empty());
    assert_eq!(run.result.network.events.len(), 2);
    assert!(run.result.network.arcs.is_empty());
    assert_eq!(run.steps.last().map(|s| s.kind), Some(StepKind::Complete));
}

#[test]
fn test_validation_errors_precede_any_schedule() {
    let unknown = vec![PertTask::new("A", "", 1.0, &["Z"])];
    assert!(matches!(
        schedule(&unknown, PertOptions::default()),
        Err(GraphTraceError::UnknownPredecessor { .. })
    ));

    let cycle = vec![
        PertTask::new("A", "", 1.0, &["B"]),
        PertTask::new("B", "", 1.0, &["A"]),
    ];
    assert!(matches!(
        schedule(&cycle, PertOptions::default()),
        Err(GraphTraceError::CyclicDependency { .. })
    ));

    let duplicate = vec![
        PertTask::new("A", "", 1.0, &[]),
        PertTask::new("A", "", 2.0, &[]),
    ];
    assert!(matches!(
        schedule(&duplicate, PertOptions::default()),
        Err(GraphTraceError::DuplicateTaskId { .. })
    ));

    let huge = vec![
        PertTask::new("X", "", 1e308, &[]),
        PertTask::new("Y", "", 1e308, &["X"]),
    ];
    assert!(matches!(
        schedule(&huge, PertOptions::default()),
        Err(GraphTraceError::Overflow { .. })
    ));
}

#[test]
fn test_rerun_is_identical() {
    let tasks = crate::datasets::pert_sample();
    let first = serde_json::to_string(&run(&tasks)).unwrap();
    let second = serde_json::to_string(&run(&tasks)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_result_serialization() {
    let run = run(&chain());
    let json = serde_json::to_value(&run).unwrap();
    assert_eq!(json["result"]["projectDuration"], 15.0);
    assert_eq!(json["result"]["schedule"][0]["taskId"], "A");
    assert_eq!(json["result"]["network"]["events"][0]["kind"], "start");
    assert_eq!(json["steps"][0]["kind"], "init");
}
