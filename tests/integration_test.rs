use cpumon::app::{App, AppMode};
use cpumon::expr::{evaluate, evaluate_pair};
use cpumon::machine::Machine;
use cpumon::repl::command::command_to_app_event;
use cpumon::repl::parser::parse_repl_input;

fn run(app: &mut App, line: &str) -> Vec<String> {
    let mut out = Vec::new();
    app.handle_event(command_to_app_event(parse_repl_input(line)), &mut out)
        .unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn end_to_end_console_session() {
    let mut app = App::new();
    app.machine.registers.write("esp", 0x7000);
    app.machine.memory.write(0x7000, 4, 0x0010_0020);
    app.machine.memory.write(0x7004, 4, 3);

    assert_eq!(run(&mut app, "p *$esp"), vec!["0x00100020\t1048608"]);
    assert_eq!(run(&mut app, "p *($esp + 4) * 2 == 6"), vec!["0x00000001\t1"]);
    assert_eq!(
        run(&mut app, "x 2 $esp"),
        vec!["0x00007000: 0x00100020 0x00000003"]
    );
    assert_eq!(run(&mut app, "p $eip == 0x100000"), vec!["0x00000001\t1"]);
    assert_eq!(run(&mut app, ""), Vec::<String>::new());
    assert_eq!(run(&mut app, "c"), vec!["Unknown command 'c'"]);
    assert_eq!(run(&mut app, "x 1"), vec!["Usage: x N EXPR"]);

    assert_eq!(
        run(&mut app, "x 4294967295 0x7ffff8"),
        vec![
            "0x007ffff8: 0x00000000 0x00000000",
            "x: stopped at end of physical memory after 2 of 4294967295 words",
        ]
    );

    assert!(run(&mut app, "q").is_empty());
    assert_eq!(app.mode, AppMode::Quit);
}

#[test]
fn documented_examples() {
    let machine = Machine::new(64, 0);
    assert_eq!(evaluate_pair("8-3-2", &machine), (3, true));
    assert_eq!(evaluate_pair("2+3*4", &machine), (14, true));
    assert_eq!(evaluate_pair("(2+3)*4", &machine), (20, true));
    assert_eq!(evaluate_pair("-5+2", &machine), (4294967293, true));
    assert_eq!(evaluate_pair("-(5+2)", &machine), (4294967289, true));
    assert_eq!(evaluate_pair("4==4", &machine), (1, true));
    assert_eq!(evaluate_pair("4==5", &machine), (0, true));
    assert_eq!(evaluate_pair("(1+2", &machine), (0, false));
    assert_eq!(evaluate_pair("1/0", &machine), (0, false));
    assert_eq!(evaluate_pair("$bogus", &machine), (0, false));
    assert_eq!(evaluate_pair("1 2", &machine), (0, false));
}

#[test]
fn adjacent_unary_operators() {
    let mut machine = Machine::new(64, 0);
    machine.memory.write(8, 4, 5);
    assert_eq!(evaluate("--5", &machine), Ok(5));
    assert_eq!(evaluate("---5", &machine), Ok(5u32.wrapping_neg()));
    assert_eq!(evaluate("-*8", &machine), Ok(5u32.wrapping_neg()));
    assert_eq!(evaluate("*--8", &machine), Ok(5));
    assert_eq!(evaluate("1--5", &machine), Ok(6));
}

#[test]
fn evaluation_is_reentrant() {
    let machine = Machine::new(64, 0x40);
    let handles: Vec<_> = (0..4u32)
        .map(|n| {
            let machine = machine.clone();
            std::thread::spawn(move || evaluate(&format!("$eip + {} * 2", n), &machine))
        })
        .collect();
    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(0x40 + n as u32 * 2));
    }
}
