//! Page renderer
//!
//! Produces the HTML body for `/` and `/index.html`. The dispatcher treats
//! this as an opaque collaborator: it forwards whatever this renders,
//! unchanged. Rendering is deterministic, so both paths serve identical
//! bytes.

/// Render the minesweeper page
pub fn render() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Minesweeper</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
            background: #1e1e2e;
            color: #cdd6f4;
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
        }
        h1 {
            margin-bottom: 16px;
        }
        #board {
            display: grid;
            gap: 2px;
        }
        .cell {
            width: 32px;
            height: 32px;
            background: #45475a;
            border: none;
            border-radius: 4px;
            color: #cdd6f4;
            font-weight: bold;
            cursor: pointer;
        }
        .cell.revealed {
            background: #313244;
            cursor: default;
        }
        .cell.bomb {
            background: #f38ba8;
        }
        .controls {
            margin-top: 16px;
            display: flex;
            gap: 8px;
        }
        .controls button {
            padding: 8px 16px;
            border: none;
            border-radius: 4px;
            background: #89b4fa;
            color: #1e1e2e;
            font-weight: 600;
            cursor: pointer;
        }
        #status {
            margin-top: 12px;
            min-height: 1.5em;
        }
    </style>
</head>
<body>
    <h1>Minesweeper</h1>
    <div id="board"></div>
    <div class="controls">
        <button id="new-game">New game</button>
        <button id="ai-move">AI move</button>
    </div>
    <p id="status"></p>

    <script type="module">
        import initGame, { Game } from "/minesweeper_rs_wasm.js";
        import initAi, { suggest_move } from "/minesweeper_ai_wasm.js";

        const WIDTH = 10;
        const HEIGHT = 10;
        const BOMBS = 12;

        let game = null;

        const board = document.getElementById("board");
        const status = document.getElementById("status");

        function draw() {
            board.innerHTML = "";
            board.style.gridTemplateColumns = `repeat(${WIDTH}, 32px)`;
            for (let y = 0; y < HEIGHT; y++) {
                for (let x = 0; x < WIDTH; x++) {
                    const cell = game.get_cell(x, y);
                    const el = document.createElement("button");
                    el.className = "cell";
                    if (cell.revealed) {
                        el.classList.add("revealed");
                        if (cell.is_bomb) {
                            el.classList.add("bomb");
                            el.textContent = "*";
                        } else if (cell.neighboring_bombs > 0) {
                            el.textContent = cell.neighboring_bombs;
                        }
                    } else if (cell.flagged) {
                        el.textContent = "F";
                    }
                    el.addEventListener("click", () => {
                        game.reveal(x, y);
                        draw();
                    });
                    el.addEventListener("contextmenu", (ev) => {
                        ev.preventDefault();
                        game.toggle_flag(x, y);
                        draw();
                    });
                    board.appendChild(el);
                }
            }
        }

        function newGame() {
            game = Game.new(WIDTH, HEIGHT, BOMBS);
            status.textContent = "";
            draw();
        }

        await initGame();
        await initAi();

        document.getElementById("new-game").addEventListener("click", newGame);
        document.getElementById("ai-move").addEventListener("click", () => {
            const move = suggest_move(game.serialize());
            if (move) {
                game.reveal(move.x, move.y);
                draw();
            } else {
                status.textContent = "AI found no safe move";
            }
        });

        newGame();
    </script>
</body>
</html>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(), render());
    }

    #[test]
    fn test_render_references_all_assets() {
        let html = render();
        assert!(html.contains("/minesweeper_rs_wasm.js"));
        assert!(html.contains("/minesweeper_ai_wasm.js"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
