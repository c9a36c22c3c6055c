use container_lib::collections::bag::Bag;
use container_lib::collections::contiguous::{Array2D, DynamicArray};
use container_lib::collections::hash::HashMap;
use container_lib::collections::linked::LinkedList;
use container_lib::collections::queue::RingQueue;
use container_lib::collections::stack::{ArrayStack, ListStack};
use container_lib::error::ContainerError;

fn main() -> Result<(), ContainerError> {
    println!("\n[DynamicArray]\n");

    let mut arr = DynamicArray::from([3, 1, 2]);
    arr.append(4);
    arr.append_front(0);
    println!("{arr} / {arr:?}");
    println!("last: {}, middle: {:?}", arr[-1], arr.get_range(1..-1)?);
    arr.sort();
    println!("sorted: {arr}, contains 2: {}", arr.contains(&2));
    while arr.pop().is_ok() {}
    println!("drained: {arr:?}");

    println!("\n[Array2D]\n");

    let mut grid = Array2D::filled(3, 3);
    grid.set(1, 1, 1)?;
    grid.set(-1, 0, 1)?;
    println!("{grid}");
    for row in grid.iter_rows().rev() {
        println!("{row:?}");
    }

    println!("\n[LinkedList]\n");

    let mut list = LinkedList::from_iter(["b", "d"]);
    list.prepend("a");
    list.insert_after(&"b", "c")?;
    list.append("e");
    println!("{list} / {list:?}");
    println!("reversed: {}", list.reversed());
    list.remove(&"c")?;
    println!("without c: {list}");

    println!("\n[Bag]\n");

    let mut bag: Bag<_> = "mississippi".chars().collect();
    bag.remove(&'s')?;
    println!(
        "s: {}, p: {}, z: {}, total: {}",
        bag.count(&'s'),
        bag.count(&'p'),
        bag.count(&'z'),
        bag.len()
    );

    println!("\n[RingQueue]\n");

    let mut queue = RingQueue::new(3);
    for order in ["soup", "salad", "steak"] {
        queue.enqueue(order)?;
    }
    if let Err(error) = queue.enqueue("cake") {
        println!("rejected cake: {error}");
    }
    println!("serving {}", queue.dequeue()?);
    queue.enqueue("cake")?;
    println!("{queue} / {queue:?}");

    println!("\n[Stacks]\n");

    let mut array_stack = ArrayStack::new(2);
    array_stack.push(1)?;
    array_stack.push(2)?;
    println!("{array_stack:?}, full: {}", array_stack.is_full());

    let list_stack: ListStack<_> = ["x", "y", "z"].into_iter().collect();
    println!("{list_stack} / {list_stack:?}");

    println!("\n[HashMap]\n");

    let mut map = HashMap::new();
    for (i, name) in ["ace", "two", "three", "four", "five", "six"].into_iter().enumerate() {
        map.set(name, i + 1);
        println!("{} pairs in {} buckets", map.len(), map.bucket_count());
    }
    map.delete(&"ace")?;
    println!("{map:?}");
    println!("three: {}", map[&"three"]);

    Ok(())
}
