use activity_board::board::ActivityBoard;

fn main() {
    yew::Renderer::<ActivityBoard>::new().render();
}
